//! Proximity system: one pairwise separation pass over the whole fleet.

use hecs::{Entity, World};

use approach_core::components::{AircraftIdent, FlightStatus};
use approach_core::events::SimEvent;
use approach_core::types::Position;

use approach_flight::proximity::{self, ScanEntry};

use crate::tally::FleetTally;

/// Run the separation scan in fleet (spawn) order and write the resulting
/// states back. Returns the number of collisions detected in this pass.
pub fn run(world: &mut World, tally: &mut FleetTally, events: &mut Vec<SimEvent>) -> u32 {
    let mut fleet: Vec<(Entity, ScanEntry)> = world
        .query::<(&AircraftIdent, &Position, &FlightStatus)>()
        .iter()
        .map(|(entity, (ident, position, status))| {
            (
                entity,
                ScanEntry {
                    id: ident.id,
                    position: *position,
                    status: *status,
                },
            )
        })
        .collect();
    fleet.sort_by_key(|(_, entry)| entry.id);

    let (entities, mut entries): (Vec<Entity>, Vec<ScanEntry>) = fleet.into_iter().unzip();
    let collisions = proximity::scan(&mut entries);

    for (entity, entry) in entities.iter().zip(&entries) {
        if let Ok(mut status) = world.get::<&mut FlightStatus>(*entity) {
            *status = entry.status;
        }
    }

    for &(first, second) in &collisions {
        log::warn!(
            "collision between {} and {}",
            crate::world_setup::callsign_for(first),
            crate::world_setup::callsign_for(second)
        );
        events.push(SimEvent::Collision { first, second });
    }

    let count = collisions.len() as u32;
    tally.collisions += count;
    count
}
