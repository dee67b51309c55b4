//! Landing system: retires aircraft that reached the runway this tick.

use hecs::{Entity, World};

use approach_core::components::{AircraftIdent, FlightStatus};
use approach_core::enums::AircraftState;
use approach_core::events::SimEvent;

use crate::tally::FleetTally;

/// Remove landed aircraft from the fleet, counting each exactly once.
/// Clears the operator selection if it pointed at a landed aircraft.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    tally: &mut FleetTally,
    selected: &mut Option<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    for (entity, (ident, status)) in world.query_mut::<(&AircraftIdent, &FlightStatus)>() {
        if status.state != AircraftState::Landed {
            continue;
        }
        tally.landed += 1;
        log::info!("{} landed successfully", ident.callsign);
        events.push(SimEvent::Landed {
            id: ident.id,
            callsign: ident.callsign.clone(),
        });
        if *selected == Some(entity) {
            *selected = None;
        }
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
