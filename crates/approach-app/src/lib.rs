//! Real-time host for the APPROACH simulation.
//!
//! Runs the engine on its own thread against the wall clock and exposes a
//! small control surface for a front end: start, send commands, poll the
//! latest snapshot, stop.

pub mod controls;
pub mod error;
pub mod game_loop;
pub mod state;

pub use approach_core as core;
pub use error::AppError;
