//! Simulation engine for APPROACH.
//!
//! Owns the hecs ECS world, runs systems on a fixed timestep, drives the
//! tick and spawn schedules, and produces SimSnapshots for the renderer.

pub mod engine;
pub mod scheduler;
pub mod systems;
pub mod tally;
pub mod world_setup;

pub use approach_core as core;
pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
