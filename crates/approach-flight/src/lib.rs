//! Flight logic for APPROACH.
//!
//! Pure functions over plain component data: the motion integrator,
//! waypoint queue handling, runway arrival and pairwise proximity.
//! No ECS dependency, so every rule can be tested in isolation.

pub mod landing;
pub mod motion;
pub mod proximity;
pub mod routing;

pub use approach_core as core;
