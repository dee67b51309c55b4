//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. Fleet state lives in components and totals in the engine.

pub mod landing;
pub mod movement;
pub mod proximity;
pub mod snapshot;
pub mod spawner;
