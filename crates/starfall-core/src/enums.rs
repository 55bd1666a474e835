//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Top-level session state machine.
///
/// Idle -> Running -> Won or Lost -> Running (via reset). Idle is only
/// ever observed before the first session starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Idle,
    Running,
    Won,
    Lost,
}

/// Which side a projectile threatens. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Fired by the player, travels in +x.
    TowardEnemies,
    /// Fired by an enemy, travels in -x.
    TowardPlayer,
}

impl GamePhase {
    /// Whether the session has ended and is waiting for a reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

impl Heading {
    /// Sign of horizontal travel.
    pub fn sign(&self) -> f32 {
        match self {
            Heading::TowardEnemies => 1.0,
            Heading::TowardPlayer => -1.0,
        }
    }
}
