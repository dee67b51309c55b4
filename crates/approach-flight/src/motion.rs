//! Per-tick motion integrator.
//!
//! Moves one aircraft `speed × dt` toward its current waypoint, or along its
//! free-flight vector when no waypoint is pending. Positions snap onto a
//! waypoint once it is within reach so aircraft never overshoot.

use glam::DVec2;

use approach_core::components::{FreeFlight, Heading, Route};
use approach_core::constants::WAYPOINT_ARRIVAL_EPSILON;
use approach_core::enums::ExhaustionPolicy;
use approach_core::geometry::Airspace;
use approach_core::types::Position;

use crate::routing;

/// Mutable view of the components the integrator touches.
pub struct FlightBody<'a> {
    pub position: &'a mut Position,
    pub heading: &'a mut Heading,
    pub route: &'a mut Route,
    pub free_flight: &'a mut FreeFlight,
}

/// What happened during one integration step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Snapped onto a waypoint this step.
    pub reached_waypoint: bool,
    /// That waypoint was the last on the route.
    pub route_finished: bool,
    /// Free flight hit an airspace edge and reflected.
    pub reflected: bool,
}

/// Advance one aircraft by `distance` tiles.
pub fn step(
    body: &mut FlightBody<'_>,
    distance: f64,
    airspace: &Airspace,
    exhaustion: ExhaustionPolicy,
) -> StepOutcome {
    if let Some(target) = routing::current_target(body.route) {
        return step_toward(body, target, distance, exhaustion);
    }
    if body.free_flight.active {
        return step_free(body, distance, airspace);
    }
    StepOutcome::default()
}

fn step_toward(
    body: &mut FlightBody<'_>,
    target: Position,
    distance: f64,
    exhaustion: ExhaustionPolicy,
) -> StepOutcome {
    let from = DVec2::from(*body.position);
    let delta = DVec2::from(target) - from;
    let remaining = delta.length();

    if remaining < distance || remaining < WAYPOINT_ARRIVAL_EPSILON {
        *body.position = target;
        let finished = routing::advance(body.route);

        if finished {
            if exhaustion == ExhaustionPolicy::FreeFlight {
                *body.free_flight = free_flight_for(body.heading.0);
            }
        } else if let Some(next) = routing::current_target(body.route) {
            if let Some(h) = body.position.heading_to(&next) {
                body.heading.0 = h;
            }
        }

        return StepOutcome {
            reached_waypoint: true,
            route_finished: finished,
            reflected: false,
        };
    }

    *body.position = (from + delta / remaining * distance).into();
    body.heading.0 = delta.y.atan2(delta.x);
    StepOutcome::default()
}

fn step_free(body: &mut FlightBody<'_>, distance: f64, airspace: &Airspace) -> StepOutcome {
    let ff = &mut *body.free_flight;
    let moved = DVec2::from(*body.position) + DVec2::new(ff.dx, ff.dy) * distance;
    let mut pos = Position::from(moved);
    let size = airspace.size as f64;
    let max = airspace.max_coord();
    let mut reflected = false;

    if pos.x < 0.0 {
        pos.x = 0.0;
        ff.dx = -ff.dx;
        reflected = true;
    } else if pos.x >= size {
        pos.x = max;
        ff.dx = -ff.dx;
        reflected = true;
    }

    if pos.y < 0.0 {
        pos.y = 0.0;
        ff.dy = -ff.dy;
        reflected = true;
    } else if pos.y >= size {
        pos.y = max;
        ff.dy = -ff.dy;
        reflected = true;
    }

    *body.position = pos;
    if reflected {
        body.heading.0 = ff.dy.atan2(ff.dx);
    }

    StepOutcome {
        reflected,
        ..Default::default()
    }
}

/// Point the aircraft at its current waypoint right away, so an operator
/// instruction shows up before the next tick.
pub fn face_current_target(position: &Position, heading: &mut Heading, route: &Route) {
    if let Some(h) = routing::current_target(route).and_then(|t| position.heading_to(&t)) {
        heading.0 = h;
    }
}

/// Unit free-flight vector for a heading.
pub fn free_flight_for(heading: f64) -> FreeFlight {
    let (dy, dx) = heading.sin_cos();
    FreeFlight {
        active: true,
        dx,
        dy,
    }
}
