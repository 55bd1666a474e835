//! First-run marker persisted across app launches.
//!
//! The embedder reads it once at startup to decide whether to show the
//! how-to-play instructions, and writes it when the first session
//! starts. A missing or unreadable marker counts as a first run; play
//! never blocks on this file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Marker written into the app data directory after the first session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMarker {
    pub started: bool,
    /// Unix timestamp (seconds) of the first session.
    pub timestamp: u64,
}

fn marker_path(dir: &Path) -> PathBuf {
    dir.join("session.json")
}

/// Whether a session has ever been started in this install.
pub fn has_session_started(dir: &Path) -> bool {
    let path = marker_path(dir);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            // A marker that has never been written is the normal first
            // run; anything else failing to read deserves a trace.
            if e.kind() != ErrorKind::NotFound {
                log::warn!("ignoring unreadable session marker {}: {e}", path.display());
            }
            return false;
        }
    };
    match serde_json::from_str::<SessionMarker>(&json) {
        Ok(marker) => marker.started,
        Err(e) => {
            log::warn!("ignoring unreadable session marker {}: {e}", path.display());
            false
        }
    }
}

/// Record that a session has started.
pub fn mark_session_started(dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create data directory: {e}"))?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| format!("System clock before epoch: {e}"))?
        .as_secs();
    let marker = SessionMarker {
        started: true,
        timestamp,
    };

    let json = serde_json::to_string_pretty(&marker)
        .map_err(|e| format!("Failed to serialize session marker: {e}"))?;
    fs::write(marker_path(dir), json)
        .map_err(|e| format!("Failed to write session marker: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_roundtrip() {
        let dir = std::env::temp_dir().join("starfall_test_first_run");
        let _ = fs::remove_dir_all(&dir);

        assert!(!has_session_started(&dir));
        mark_session_started(&dir).unwrap();
        assert!(has_session_started(&dir));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_marker_counts_as_first_run() {
        let dir = std::env::temp_dir().join("starfall_test_first_run_unreadable");
        let _ = fs::remove_dir_all(&dir);
        // A directory where the marker file belongs makes the read fail
        // with something other than NotFound.
        fs::create_dir_all(dir.join("session.json")).unwrap();

        assert!(!has_session_started(&dir));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_marker_counts_as_first_run() {
        let dir = std::env::temp_dir().join("starfall_test_first_run_corrupt");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("session.json"), "not json").unwrap();

        assert!(!has_session_started(&dir));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_dir_counts_as_first_run() {
        let dir = std::env::temp_dir().join("starfall_test_first_run_missing");
        let _ = fs::remove_dir_all(&dir);
        assert!(!has_session_started(&dir));
    }
}
