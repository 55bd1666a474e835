//! STARFALL application layer.
//!
//! Wires the simulation into a fixed-rate background thread and exposes
//! the control surface a frontend shell needs: start, command, poll,
//! shutdown. Also owns the little first-run marker on disk.

pub mod first_run;
pub mod game_loop;
pub mod session;
pub mod state;

pub use starfall_core as core;
