//! ECS systems that operate on the game world each tick.
//!
//! Systems are free functions taking `&mut World` (or `&World` for
//! read-only passes). They own no state: everything lives in components
//! or engine fields passed in by the caller.

pub mod cleanup;
pub mod collision;
pub mod enemy_fire;
pub mod movement;
pub mod snapshot;
pub mod spawner;
