//! Snapshot system: queries the ECS world and builds a complete SimSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use approach_core::components::*;
use approach_core::enums::SimPhase;
use approach_core::events::SimEvent;
use approach_core::geometry::Runway;
use approach_core::state::{AircraftView, FleetCounters, SimSnapshot};
use approach_core::types::{Position, SimTime};

use approach_flight::routing;

use crate::tally::FleetTally;

/// Engine-level values that go into every snapshot alongside the fleet.
pub struct SnapshotContext {
    pub time: SimTime,
    pub phase: SimPhase,
    pub speed_tiles_per_sec: f64,
    pub spawn_rate_per_min: u32,
    pub runway: Runway,
    pub tally: FleetTally,
}

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(world: &World, ctx: &SnapshotContext, events: Vec<SimEvent>) -> SimSnapshot {
    let aircraft = build_aircraft(world);
    let active_count = aircraft.iter().filter(|a| a.state.is_airborne()).count() as u32;

    SimSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        speed_tiles_per_sec: ctx.speed_tiles_per_sec,
        spawn_rate_per_min: ctx.spawn_rate_per_min,
        runway: ctx.runway,
        counters: FleetCounters {
            active_count,
            fleet_size: aircraft.len() as u32,
            landed_count: ctx.tally.landed,
            collision_count: ctx.tally.collisions,
        },
        aircraft,
        events,
    }
}

/// Build AircraftView list, in spawn order.
fn build_aircraft(world: &World) -> Vec<AircraftView> {
    let mut aircraft: Vec<AircraftView> = world
        .query::<(
            &AircraftIdent,
            &Position,
            &Heading,
            &FlightStatus,
            &Selection,
            &Route,
        )>()
        .iter()
        .map(
            |(_, (ident, position, heading, status, selection, route))| AircraftView {
                id: ident.id,
                callsign: ident.callsign.clone(),
                position: *position,
                heading: heading.0,
                state: status.state,
                selected: selection.selected,
                waypoints_remaining: routing::remaining(route),
            },
        )
        .collect();

    aircraft.sort_by_key(|a| a.id);
    aircraft
}
