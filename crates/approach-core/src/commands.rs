//! Operator commands sent from the UI to the simulation.
//!
//! Commands are validated at the boundary with [`validate_command`] and
//! queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SPAWN_RATE_PER_MIN, MAX_SPEED_TILES_PER_SEC};
use crate::error::ControlError;
use crate::types::Position;

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Selection ---
    /// Select an aircraft, deselecting any other.
    SelectAircraft { id: u32 },
    /// Pointer click on an aircraft: select it, or deselect it if it already is.
    ToggleSelection { id: u32 },
    /// Clear the current selection.
    Deselect,

    // --- Routing ---
    /// Give a waypoint to an aircraft. Only honored for the selected aircraft.
    AssignWaypoint { aircraft_id: u32, point: Position },
    /// Pointer click on the airspace: route the selected aircraft there.
    DirectSelected { point: Position },

    // --- Controls ---
    /// Set the fleet-wide speed in tiles per second.
    SetSpeed { tiles_per_sec: f64 },
    /// Set the spawn rate in aircraft per minute. Zero suspends spawning.
    SetSpawnRate { per_minute: u32 },
    /// Admit one aircraft immediately.
    SpawnOne,

    // --- Simulation control ---
    Pause,
    Resume,
    /// Clear the fleet and counters and restart both schedules.
    Reset,
}

/// Reject malformed control inputs before they reach the engine.
pub fn validate_command(command: &OperatorCommand) -> Result<(), ControlError> {
    match *command {
        OperatorCommand::SetSpeed { tiles_per_sec } => validate_speed(tiles_per_sec),
        OperatorCommand::SetSpawnRate { per_minute } => validate_spawn_rate(per_minute),
        OperatorCommand::AssignWaypoint { point, .. } | OperatorCommand::DirectSelected { point } => {
            if point.x.is_finite() && point.y.is_finite() {
                Ok(())
            } else {
                Err(ControlError::NonFinitePoint {
                    x: point.x,
                    y: point.y,
                })
            }
        }
        _ => Ok(()),
    }
}

/// Speed must be finite and in `(0, MAX_SPEED_TILES_PER_SEC]`.
pub fn validate_speed(tiles_per_sec: f64) -> Result<(), ControlError> {
    if tiles_per_sec.is_finite() && tiles_per_sec > 0.0 && tiles_per_sec <= MAX_SPEED_TILES_PER_SEC
    {
        Ok(())
    } else {
        Err(ControlError::InvalidSpeed(tiles_per_sec))
    }
}

/// Spawn rate must not exceed `MAX_SPAWN_RATE_PER_MIN`.
pub fn validate_spawn_rate(per_minute: u32) -> Result<(), ControlError> {
    if per_minute <= MAX_SPAWN_RATE_PER_MIN {
        Ok(())
    } else {
        Err(ControlError::InvalidSpawnRate(per_minute))
    }
}
