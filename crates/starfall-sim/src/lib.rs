//! Simulation engine for STARFALL.
//!
//! Owns the hecs ECS world, steps the game at a fixed tick rate, and
//! produces snapshots for the frontend. Completely headless: no
//! rendering, no timing, no I/O.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use starfall_core as core;
