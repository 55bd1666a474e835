//! Game state snapshot: the complete visible state sent to the frontend.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, Heading};
use crate::events::GameEvent;
use crate::types::{Playfield, Rect, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub playfield: Playfield,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events emitted during this tick.
    pub events: Vec<GameEvent>,
}

/// The player ship as seen by the renderer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Rect,
}

/// An enemy as seen by the renderer. Lists are sorted by id, which is
/// creation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub rect: Rect,
    pub speed: f32,
}

/// A projectile as seen by the renderer. The heading lets the renderer
/// tell friendly and hostile shots apart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub rect: Rect,
    pub heading: Heading,
}
