//! Movement system: integrates every airborne aircraft, then checks it for
//! runway arrival.

use hecs::World;

use approach_core::components::{AircraftIdent, FlightStatus, FreeFlight, Heading, Route};
use approach_core::enums::AircraftState;
use approach_core::events::SimEvent;
use approach_core::geometry::Airspace;
use approach_core::rules::FlightRules;
use approach_core::types::Position;

use approach_flight::landing;
use approach_flight::motion::{self, FlightBody};

/// Move each flying or warning aircraft `distance` tiles. Aircraft that
/// arrive at the runway are marked `Landed`; the landing system retires them.
pub fn run(
    world: &mut World,
    distance: f64,
    airspace: &Airspace,
    rules: &FlightRules,
    events: &mut Vec<SimEvent>,
) {
    for (_entity, (ident, position, heading, route, free_flight, status)) in world.query_mut::<(
        &AircraftIdent,
        &mut Position,
        &mut Heading,
        &mut Route,
        &mut FreeFlight,
        &mut FlightStatus,
    )>() {
        if !status.state.is_airborne() {
            continue;
        }

        let mut body = FlightBody {
            position,
            heading,
            route,
            free_flight,
        };
        let outcome = motion::step(&mut body, distance, airspace, rules.exhaustion);

        if outcome.route_finished {
            log::debug!(
                "{} reached final waypoint at ({:.1}, {:.1})",
                ident.callsign,
                body.position.x,
                body.position.y
            );
            events.push(SimEvent::FinalWaypointReached {
                id: ident.id,
                position: *body.position,
            });
        }

        if landing::should_land(
            status.state,
            rules.landing,
            body.position,
            &airspace.runway,
            &outcome,
        ) {
            status.state = AircraftState::Landed;
        }
    }
}
