//! Entity spawn factories for aircraft.

use hecs::World;

use approach_core::components::*;
use approach_core::constants::CALLSIGN_PREFIX;
use approach_core::rules::FlightRules;
use approach_core::types::Position;

use approach_flight::motion::free_flight_for;

/// Display callsign for an aircraft id, e.g. `FL007`.
pub fn callsign_for(id: u32) -> String {
    format!("{CALLSIGN_PREFIX}{id:03}")
}

/// Spawn one aircraft with the full component bundle.
///
/// Under free-flight rules it starts cruising along `heading`; otherwise it
/// waits where it is for a route.
pub fn spawn_aircraft(
    world: &mut World,
    id: u32,
    position: Position,
    heading: f64,
    rules: &FlightRules,
) -> hecs::Entity {
    let free_flight = if rules.spawns_in_free_flight() {
        free_flight_for(heading)
    } else {
        FreeFlight::default()
    };

    world.spawn((
        AircraftIdent {
            id,
            callsign: callsign_for(id),
        },
        position,
        Heading(heading),
        FlightStatus::default(),
        Route::default(),
        free_flight,
        Selection::default(),
    ))
}
