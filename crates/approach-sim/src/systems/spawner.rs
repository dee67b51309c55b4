//! Spawn system: admits new aircraft at random airspace edges.

use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use approach_core::enums::SpawnEdge;
use approach_core::events::SimEvent;
use approach_core::geometry::Airspace;
use approach_core::rules::FlightRules;
use approach_core::types::Position;

use crate::world_setup;

/// Spawn one aircraft with identity `id` on a random edge.
///
/// Free-flight aircraft get a random heading; others face the runway
/// while they wait for a route.
pub fn spawn_from_edge(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    airspace: &Airspace,
    rules: &FlightRules,
    id: u32,
    events: &mut Vec<SimEvent>,
) -> hecs::Entity {
    let edge = *SpawnEdge::ALL.choose(rng).unwrap_or(&SpawnEdge::Left);
    let along: f64 = rng.gen_range(0.0..1.0);
    let mut position = airspace.spawn_point(edge, along);
    if rules.snap_to_grid {
        position = position.snapped_to_grid();
    }

    let heading = initial_heading(rng, airspace, rules, &position);
    spawn_at(world, airspace, rules, id, position, heading, events)
}

/// Spawn one aircraft at an explicit position.
pub fn spawn_at(
    world: &mut World,
    airspace: &Airspace,
    rules: &FlightRules,
    id: u32,
    position: Position,
    heading: f64,
    events: &mut Vec<SimEvent>,
) -> hecs::Entity {
    let position = airspace.clamp(position);
    let entity = world_setup::spawn_aircraft(world, id, position, heading, rules);
    let callsign = world_setup::callsign_for(id);

    log::info!(
        "{} spawned at ({:.1}, {:.1}) with heading {}°",
        callsign,
        position.x,
        position.y,
        heading.to_degrees().round()
    );
    events.push(SimEvent::Spawned {
        id,
        callsign,
        position,
        heading,
    });
    entity
}

/// Heading a newly spawned aircraft starts with.
pub fn initial_heading(
    rng: &mut ChaCha8Rng,
    airspace: &Airspace,
    rules: &FlightRules,
    position: &Position,
) -> f64 {
    if rules.spawns_in_free_flight() {
        rng.gen_range(0.0..std::f64::consts::TAU)
    } else {
        position.heading_to(&airspace.runway.center()).unwrap_or(0.0)
    }
}
