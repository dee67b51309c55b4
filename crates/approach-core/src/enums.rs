//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Aircraft lifecycle state.
///
/// `Flying ⇄ Warning → Collided`, `Flying/Warning → Landed`.
/// Both terminal states freeze the aircraft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftState {
    #[default]
    Flying,
    /// Another aircraft is inside safe separation. Reverts on the next scan.
    Warning,
    /// Arrived at the runway and retired from the fleet.
    Landed,
    /// Collided with another aircraft. Stays in the fleet, frozen.
    Collided,
}

impl AircraftState {
    /// Landed and collided aircraft never move or change state again.
    pub fn is_terminal(self) -> bool {
        matches!(self, AircraftState::Landed | AircraftState::Collided)
    }

    /// Flying and warning aircraft are integrated each tick.
    pub fn is_airborne(self) -> bool {
        matches!(self, AircraftState::Flying | AircraftState::Warning)
    }
}

/// How a new waypoint combines with an aircraft's existing route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentMode {
    /// Drop the whole queue and fly straight to the new point.
    #[default]
    Replace,
    /// Keep the leg in progress and queue the new point after it.
    Append,
}

/// What an aircraft does once its route is used up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhaustionPolicy {
    /// Continue along the last heading, reflecting off airspace edges.
    #[default]
    FreeFlight,
    /// Stop at the final waypoint and wait for instructions.
    Hold,
}

/// Which condition counts as arriving at the runway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingRule {
    /// Within `LANDING_RADIUS` of the runway centre, anywhere along the strip.
    #[default]
    Radius,
    /// Just reached a final waypoint that lies on a runway tile.
    WaypointArrival,
}

/// Airspace edge an aircraft enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Left,
    Top,
    Bottom,
    Right,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Left,
        SpawnEdge::Top,
        SpawnEdge::Bottom,
        SpawnEdge::Right,
    ];
}

/// Top-level engine phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Both schedules are live.
    #[default]
    Running,
    /// Operator paused; ticks and spawns are suspended.
    Paused,
    /// Stopped after a collision (only with `halt_on_collision`). Needs a reset.
    Halted,
}
