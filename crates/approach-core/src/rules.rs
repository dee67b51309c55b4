//! Flight rules: the behavioral variant an engine runs with.
//!
//! The two presets describe the two consistent ways of combining
//! routing, route exhaustion and landing detection. An engine keeps one
//! set of rules for its whole lifetime.

use serde::{Deserialize, Serialize};

use crate::enums::{AssignmentMode, ExhaustionPolicy, LandingRule};

/// Routing, exhaustion and landing semantics for a whole fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRules {
    pub assignment: AssignmentMode,
    pub exhaustion: ExhaustionPolicy,
    pub landing: LandingRule,
    /// Floor spawn points and operator clicks onto the tile grid.
    pub snap_to_grid: bool,
}

impl FlightRules {
    /// Aircraft spawn on a random heading and keep flying after their route
    /// runs out, bouncing off the airspace edges. A new waypoint replaces the
    /// route; landing is detected by proximity to the runway.
    pub fn free_flight() -> Self {
        Self {
            assignment: AssignmentMode::Replace,
            exhaustion: ExhaustionPolicy::FreeFlight,
            landing: LandingRule::Radius,
            snap_to_grid: false,
        }
    }

    /// Aircraft wait at their spawn point until routed, queue waypoints
    /// behind the leg in progress, hold at the end of the route, and land
    /// by finishing a route on a runway tile.
    pub fn waypoint_only() -> Self {
        Self {
            assignment: AssignmentMode::Append,
            exhaustion: ExhaustionPolicy::Hold,
            landing: LandingRule::WaypointArrival,
            snap_to_grid: true,
        }
    }

    /// Whether spawned aircraft carry a free-flight vector.
    pub fn spawns_in_free_flight(&self) -> bool {
        self.exhaustion == ExhaustionPolicy::FreeFlight
    }
}

impl Default for FlightRules {
    fn default() -> Self {
        Self::free_flight()
    }
}
