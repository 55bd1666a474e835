//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Heading;

/// Marks the player ship entity. One per session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip {
    /// Vertical distance covered by one movement nudge (pixels).
    pub step: f32,
}

/// An enemy ship drifting left across the field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Creation-ordered id, unique for the lifetime of the engine.
    pub id: u32,
    /// Horizontal drift speed (pixels per tick), randomized at spawn.
    pub speed: f32,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Creation-ordered id, unique for the lifetime of the engine.
    pub id: u32,
    /// Which side this projectile threatens. Never changes in flight.
    pub heading: Heading,
    /// Horizontal speed (pixels per tick).
    pub speed: f32,
}

/// Periodic fire schedule attached to an armed enemy. The component
/// dies with the entity, so a destroyed enemy can never fire again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireCycle {
    /// Ticks between shots, randomized once at spawn.
    pub interval_ticks: u64,
    /// Tick at which the next shot is due.
    pub next_fire_tick: u64,
}

// Rect from types.rs doubles as the position component on every
// player, enemy, and projectile entity.
