//! Runway arrival rules.

use approach_core::constants::LANDING_RADIUS;
use approach_core::enums::{AircraftState, LandingRule};
use approach_core::geometry::Runway;
use approach_core::types::Position;

use crate::motion::StepOutcome;

/// Within `LANDING_RADIUS` of the runway centre and alongside the strip
/// (its rows extended by the same radius).
pub fn within_landing_radius(position: &Position, runway: &Runway) -> bool {
    let radius_sq = LANDING_RADIUS * LANDING_RADIUS;
    runway.spans_row(position.y, LANDING_RADIUS)
        && position.distance_sq_to(&runway.center()) <= radius_sq
}

/// Decide whether an aircraft lands after its move this tick.
///
/// Only airborne aircraft can land, so asking again about a landed (or
/// collided) aircraft always answers `false`.
pub fn should_land(
    state: AircraftState,
    rule: LandingRule,
    position: &Position,
    runway: &Runway,
    outcome: &StepOutcome,
) -> bool {
    if !state.is_airborne() {
        return false;
    }
    match rule {
        LandingRule::Radius => within_landing_radius(position, runway),
        LandingRule::WaypointArrival => outcome.route_finished && runway.covers_tile(position),
    }
}
