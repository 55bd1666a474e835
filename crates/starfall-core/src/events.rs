//! Events emitted by the game for frontend feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Heading;

/// Side-effect notifications carried in each snapshot (sound cues,
/// popups, score flashes). Drained every tick; an event appears in
/// exactly one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile was fired.
    ShotFired { heading: Heading },
    /// An enemy was destroyed by a player shot.
    EnemyDestroyed { enemy_id: u32 },
    /// The player ship was hit by an enemy shot.
    PlayerHit { lives_remaining: u32 },
    /// The session ended in a win.
    GameWon { score: u32 },
    /// The session ended in a loss.
    GameLost { score: u32 },
}
