//! Simulation snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{AircraftState, SimPhase};
use crate::events::SimEvent;
use crate::geometry::Runway;
use crate::types::{Position, SimTime};

/// Complete simulation state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub speed_tiles_per_sec: f64,
    pub spawn_rate_per_min: u32,
    pub runway: Runway,
    /// Aircraft in the fleet, in spawn order.
    pub aircraft: Vec<AircraftView>,
    pub counters: FleetCounters,
    pub events: Vec<SimEvent>,
}

/// One aircraft as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftView {
    pub id: u32,
    pub callsign: String,
    pub position: Position,
    /// Radians, `atan2(dy, dx)`.
    pub heading: f64,
    pub state: AircraftState,
    pub selected: bool,
    /// Waypoints still ahead on the route, including the one in progress.
    pub waypoints_remaining: usize,
}

/// Running totals for the status display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetCounters {
    /// Flying and warning aircraft.
    pub active_count: u32,
    /// Everything still in the fleet, collided aircraft included.
    pub fleet_size: u32,
    pub landed_count: u32,
    pub collision_count: u32,
}

impl SimSnapshot {
    /// Look up an aircraft view by id.
    pub fn aircraft_by_id(&self, id: u32) -> Option<&AircraftView> {
        self.aircraft.iter().find(|a| a.id == id)
    }

    /// The currently selected aircraft, if any.
    pub fn selected(&self) -> Option<&AircraftView> {
        self.aircraft.iter().find(|a| a.selected)
    }
}
