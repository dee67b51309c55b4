//! Waypoint queue operations.

use approach_core::components::{FreeFlight, Route};
use approach_core::enums::AssignmentMode;
use approach_core::types::Position;

/// The waypoint currently being flown toward, if the route is not exhausted.
pub fn current_target(route: &Route) -> Option<Position> {
    route.waypoints.get(route.cursor).copied()
}

/// Waypoints still ahead, including the one in progress.
pub fn remaining(route: &Route) -> usize {
    route.waypoints.len().saturating_sub(route.cursor)
}

pub fn is_exhausted(route: &Route) -> bool {
    route.cursor >= route.waypoints.len()
}

/// Mark the current waypoint as reached. Returns `true` when it was the last one.
pub fn advance(route: &mut Route) -> bool {
    if route.cursor < route.waypoints.len() {
        route.cursor += 1;
    }
    is_exhausted(route)
}

/// Add an operator waypoint to a route and leave free flight.
///
/// `Replace` drops the whole queue. `Append` keeps the leg in progress
/// (dropping legs already flown and any queued behind it) and puts the new
/// point after it.
pub fn assign(route: &mut Route, free_flight: &mut FreeFlight, point: Position, mode: AssignmentMode) {
    match mode {
        AssignmentMode::Replace => {
            route.waypoints.clear();
            route.waypoints.push(point);
        }
        AssignmentMode::Append => {
            route.waypoints.drain(..route.cursor.min(route.waypoints.len()));
            route.waypoints.truncate(1);
            route.waypoints.push(point);
        }
    }
    route.cursor = 0;
    free_flight.active = false;
}
