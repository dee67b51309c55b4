//! Events emitted by the simulation for the UI message log and telemetry.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Something noteworthy that happened since the previous snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A new aircraft entered the airspace.
    Spawned {
        id: u32,
        callsign: String,
        position: Position,
        heading: f64,
    },
    /// The operator routed an aircraft.
    WaypointAssigned {
        id: u32,
        point: Position,
        /// The waypoint lies on or next to the runway.
        toward_runway: bool,
    },
    /// An aircraft used up its route.
    FinalWaypointReached { id: u32, position: Position },
    /// An aircraft landed and left the fleet.
    Landed { id: u32, callsign: String },
    /// Two aircraft collided.
    Collision { first: u32, second: u32 },
    /// The spawn cadence changed. Zero means spawning is suspended.
    SpawnRateChanged { per_minute: u32 },
    /// The simulation was reset.
    Reset,
}
