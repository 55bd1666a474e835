//! Player commands sent from the frontend to the game.
//!
//! Commands are queued by the app layer and processed at the next tick
//! boundary. Commands that do not apply to the current phase are ignored.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Nudge the player ship up by one step.
    MoveUp,
    /// Nudge the player ship down by one step.
    MoveDown,

    // --- Combat ---
    /// Fire a projectile from the player ship.
    Fire,

    // --- Session control ---
    /// Start a session from the idle state.
    StartGame,
    /// Start a fresh session after a win or loss.
    ResetGame,

    // --- Environment ---
    /// The hosting window changed size; update the playfield.
    Resize { width: f32, height: f32 },
}
