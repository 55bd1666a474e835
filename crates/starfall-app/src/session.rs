//! Embedder-facing control surface for the game loop.
//!
//! Thin functions over `AppState`: start the loop, forward player
//! commands, poll the latest snapshot, shut down. All fallible paths
//! return `Result<_, String>` so shells can surface them directly.

use std::sync::mpsc;

use starfall_core::commands::PlayerCommand;
use starfall_core::state::GameSnapshot;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the game loop thread if not already running.
///
/// Returns the snapshot receiver for push consumers. The latest-snapshot
/// cell in `state` fills regardless, for pollers.
pub fn start(state: &AppState) -> Result<mpsc::Receiver<GameSnapshot>, String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Game loop already running".into());
    }

    let (cmd_tx, snap_rx) = game_loop::spawn_game_loop(state.latest_snapshot.clone());

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;
    log::info!("game loop started");

    Ok(snap_rx)
}

/// Send a player command to the game loop.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Game loop not started".into()),
    }
}

/// Get the latest snapshot synchronously (for polling or an initial paint).
pub fn latest_snapshot(state: &AppState) -> Result<Option<GameSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop thread. Safe to call when nothing is running.
pub fn shutdown(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    if !*running {
        return Ok(());
    }

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    if let Some(tx) = tx_lock.take() {
        // The loop may already be gone if its channel died; not an error.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    *running = false;
    log::info!("game loop stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_send_before_start_errors() {
        let state = AppState::new();
        let result = send_command(&state, PlayerCommand::StartGame);
        assert!(result.is_err());
    }

    #[test]
    fn test_start_twice_errors() {
        let state = AppState::new();
        let _rx = start(&state).expect("First start should succeed");
        assert!(start(&state).is_err(), "Second start must be rejected");
        shutdown(&state).unwrap();
    }

    #[test]
    fn test_shutdown_without_start_is_ok() {
        let state = AppState::new();
        assert!(shutdown(&state).is_ok());
        assert!(shutdown(&state).is_ok());
    }

    #[test]
    fn test_start_command_poll_shutdown() {
        let state = AppState::new();
        let _rx = start(&state).unwrap();

        send_command(&state, PlayerCommand::StartGame).unwrap();

        // The loop ticks at 60Hz; give it a moment to publish.
        let mut polled = None;
        for _ in 0..100 {
            polled = latest_snapshot(&state).unwrap();
            if polled.is_some() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(polled.is_some(), "Polling should observe a snapshot");

        shutdown(&state).unwrap();
        // After shutdown the sender is gone.
        assert!(send_command(&state, PlayerCommand::Fire).is_err());
    }
}
