//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Flight logic lives in `approach-flight` and the sim systems.

use serde::{Deserialize, Serialize};

use crate::enums::AircraftState;
use crate::types::Position;

/// Identity of an aircraft. Ids are never reused within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftIdent {
    pub id: u32,
    /// Display callsign, e.g. `FL007`.
    pub callsign: String,
}

/// Direction of travel in radians, `atan2(dy, dx)` in airspace coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(pub f64);

/// Lifecycle state plus the per-scan collision latch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FlightStatus {
    pub state: AircraftState,
    /// Set when this aircraft was counted in a collision during the current
    /// scan. Cleared at the start of every scan for non-collided aircraft.
    pub collision_latched: bool,
}

/// Ordered waypoints and a cursor to the one being flown toward.
///
/// `cursor <= waypoints.len()`; `cursor == waypoints.len()` means exhausted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub waypoints: Vec<Position>,
    pub cursor: usize,
}

/// Persistent unit direction used when no waypoint is pending.
/// `active == false` means the aircraft is following (or waiting for) a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeFlight {
    pub active: bool,
    pub dx: f64,
    pub dy: f64,
}

/// Whether the operator has this aircraft selected for the next waypoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Selection {
    pub selected: bool,
}
