//! Pairwise proximity and collision classification.
//!
//! All comparisons use squared distances.

use approach_core::components::FlightStatus;
use approach_core::constants::{COLLISION_DISTANCE_SQ, SAFE_DISTANCE_SQ};
use approach_core::enums::AircraftState;
use approach_core::types::Position;

/// Separation class of one aircraft pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separation {
    Collision,
    Warning,
    Clear,
}

/// One fleet member as seen by the scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanEntry {
    pub id: u32,
    pub position: Position,
    pub status: FlightStatus,
}

pub fn classify(a: &Position, b: &Position) -> Separation {
    let distance_sq = a.distance_sq_to(b);
    if distance_sq < COLLISION_DISTANCE_SQ {
        Separation::Collision
    } else if distance_sq < SAFE_DISTANCE_SQ {
        Separation::Warning
    } else {
        Separation::Clear
    }
}

/// Run one detection pass over the fleet, in fleet order.
///
/// Warnings from the previous pass are cleared first, as are collision
/// latches of aircraft that have not collided. Each newly collided pair is
/// returned once, as `(first_id, second_id)`.
pub fn scan(entries: &mut [ScanEntry]) -> Vec<(u32, u32)> {
    for entry in entries.iter_mut() {
        if entry.status.state == AircraftState::Warning {
            entry.status.state = AircraftState::Flying;
        }
        if entry.status.state != AircraftState::Collided {
            entry.status.collision_latched = false;
        }
    }

    let mut collisions = Vec::new();

    for i in 0..entries.len() {
        if entries[i].status.state.is_terminal() {
            continue;
        }
        // Once `i` collides its latch blocks further collisions, but it keeps
        // raising warnings on the rest of the fleet.
        for j in (i + 1)..entries.len() {
            if entries[j].status.state.is_terminal() {
                continue;
            }

            let (head, tail) = entries.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            match classify(&a.position, &b.position) {
                Separation::Collision => {
                    if !a.status.collision_latched && !b.status.collision_latched {
                        a.status.state = AircraftState::Collided;
                        b.status.state = AircraftState::Collided;
                        a.status.collision_latched = true;
                        b.status.collision_latched = true;
                        collisions.push((a.id, b.id));
                    }
                }
                Separation::Warning => {
                    if a.status.state == AircraftState::Flying {
                        a.status.state = AircraftState::Warning;
                    }
                    if b.status.state == AircraftState::Flying {
                        b.status.state = AircraftState::Warning;
                    }
                }
                Separation::Clear => {}
            }
        }
    }

    collisions
}
