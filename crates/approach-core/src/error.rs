//! Error types for the simulation boundary.
//!
//! The simulation itself has no failure modes; these errors only arise when
//! validating operator controls or loading configuration.

use thiserror::Error;

/// A control input rejected before reaching the engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    #[error("speed must be positive, finite and within the speed limit, got {0} tiles/s")]
    InvalidSpeed(f64),

    #[error("spawn rate above the supported maximum, got {0}/min")]
    InvalidSpawnRate(u32),

    #[error("tick interval must be positive and finite, got {0}")]
    InvalidTickInterval(f64),

    #[error("waypoint coordinates must be finite, got ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },
}

/// Failure to load a simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] ControlError),
}
