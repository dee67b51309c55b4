//! Tests for the simulation engine, scheduler, systems and operator actions.

use std::f64::consts::FRAC_PI_2;

use approach_core::commands::OperatorCommand;
use approach_core::components::AircraftIdent;
use approach_core::enums::*;
use approach_core::error::{ConfigError, ControlError};
use approach_core::events::SimEvent;
use approach_core::rules::FlightRules;
use approach_core::state::SimSnapshot;
use approach_core::types::Position;

use crate::engine::{SimConfig, SimulationEngine};
use crate::scheduler::{spawn_period_for, ScheduledTask, Scheduler};

/// Engine with no automatic spawning and the given fleet speed.
fn quiet_engine(speed: f64) -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        speed_tiles_per_sec: speed,
        spawn_rate_per_min: 0,
        ..Default::default()
    })
}

fn spawned_count(snap: &SimSnapshot) -> usize {
    snap.events
        .iter()
        .filter(|e| matches!(e, SimEvent::Spawned { .. }))
        .count()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        spawn_rate_per_min: 60,
        speed_tiles_per_sec: 2.0,
        ..Default::default()
    };
    let mut engine_a = SimulationEngine::new(config.clone());
    let mut engine_b = SimulationEngine::new(config);

    for _ in 0..300 {
        let snap_a = engine_a.advance(0.1);
        let snap_b = engine_b.advance(0.1);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        spawn_rate_per_min: 60,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        spawn_rate_per_min: 60,
        ..Default::default()
    });

    let mut diverged = false;
    for _ in 0..100 {
        let json_a = serde_json::to_string(&engine_a.advance(0.1)).unwrap();
        let json_b = serde_json::to_string(&engine_b.advance(0.1)).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Scheduler ----

#[test]
fn test_scheduler_orders_tasks_by_due_time() {
    let mut scheduler = Scheduler::new(0.4, Some(1.0));

    let mut fired = Vec::new();
    while let Some(task) = scheduler.pop_due(1.25) {
        fired.push((task, scheduler.now_secs()));
    }
    let tasks: Vec<ScheduledTask> = fired.iter().map(|(t, _)| *t).collect();
    assert_eq!(
        tasks,
        vec![
            ScheduledTask::Tick,
            ScheduledTask::Tick,
            ScheduledTask::Spawn,
            ScheduledTask::Tick,
        ]
    );
    assert!((fired[2].1 - 1.0).abs() < 1e-12);
}

#[test]
fn test_scheduler_tie_goes_to_tick() {
    let mut scheduler = Scheduler::new(0.5, Some(0.5));
    assert_eq!(scheduler.pop_due(0.5), Some(ScheduledTask::Tick));
    assert_eq!(scheduler.pop_due(0.5), Some(ScheduledTask::Spawn));
    assert_eq!(scheduler.pop_due(0.5), None);
}

#[test]
fn test_scheduler_halt_and_resume() {
    let mut scheduler = Scheduler::new(0.1, Some(1.0));
    scheduler.halt();
    assert!(!scheduler.is_running());
    assert_eq!(scheduler.pop_due(100.0), None);
    assert_eq!(scheduler.next_due_in(), None);

    scheduler.advance_to(5.0);
    scheduler.resume();
    assert!((scheduler.next_due_in().unwrap() - 0.1).abs() < 1e-12);
    assert_eq!(scheduler.pop_due(5.05), None);
    assert_eq!(scheduler.pop_due(5.2), Some(ScheduledTask::Tick));
}

#[test]
fn test_scheduler_spawn_period_restart() {
    let mut scheduler = Scheduler::new(10.0, Some(1.0));
    scheduler.advance_to(0.5);
    scheduler.set_spawn_period(Some(2.0));
    // Next spawn is one new period after the change, not at t=1.0.
    assert_eq!(scheduler.pop_due(2.4), None);
    assert_eq!(scheduler.pop_due(2.5), Some(ScheduledTask::Spawn));

    scheduler.set_spawn_period(None);
    assert_eq!(scheduler.pop_due(9.9), None);
    assert_eq!(scheduler.spawn_period_secs(), None);
}

#[test]
fn test_spawn_period_for_rate() {
    assert_eq!(spawn_period_for(0), None);
    assert_eq!(spawn_period_for(60), Some(1.0));
    assert_eq!(spawn_period_for(5), Some(12.0));
}

// ---- Tick timing ----

#[test]
fn test_advance_runs_ticks_at_fixed_interval() {
    let mut engine = quiet_engine(0.5);
    engine.advance(1.0);
    let ticks = engine.time().tick;
    assert!((9..=11).contains(&ticks), "expected ~10 ticks, got {ticks}");
}

#[test]
fn test_tick_uses_fixed_timestep() {
    let mut engine = quiet_engine(0.5);
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 10);
    assert!((engine.time().elapsed_secs - 1.0).abs() < 1e-10);
}

// ---- Spawning ----

#[test]
fn test_spawn_ids_and_callsigns() {
    let mut engine = quiet_engine(0.0);
    let first = engine.spawn_one();
    let second = engine.spawn_one();
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    let snap = engine.tick();
    assert_eq!(snap.aircraft[0].callsign, "FL001");
    assert_eq!(snap.aircraft[1].callsign, "FL002");
}

#[test]
fn test_spawns_land_on_edges() {
    let mut engine = quiet_engine(0.0);
    for _ in 0..50 {
        engine.spawn_one();
    }
    let snap = engine.snapshot();
    assert_eq!(snap.aircraft.len(), 50);
    for a in &snap.aircraft {
        let p = a.position;
        assert!(
            p.x == 0.0 || p.y == 0.0 || p.x == 29.0 || p.y == 29.0,
            "{} spawned off-edge at ({}, {})",
            a.callsign,
            p.x,
            p.y
        );
        assert_eq!(a.state, AircraftState::Flying);
    }
}

#[test]
fn test_spawn_rate_zero_suspends_spawning() {
    let mut engine = quiet_engine(0.5);
    let snap = engine.advance(600.0);
    assert_eq!(spawned_count(&snap), 0);
    assert!(snap.aircraft.is_empty());
    assert!(engine.time().tick > 5000, "ticks keep running");
}

#[test]
fn test_spawn_rate_sixty_spawns_once_per_second() {
    let mut engine = quiet_engine(0.0);
    engine.set_spawn_rate(60);
    let snap = engine.advance(10.0);
    let spawned = spawned_count(&snap);
    assert!((9..=11).contains(&spawned), "expected ~10 spawns, got {spawned}");
}

#[test]
fn test_spawn_rate_change_applies_to_next_spawn() {
    let mut engine = quiet_engine(0.0);
    engine.set_spawn_rate(60);
    assert_eq!(spawned_count(&engine.advance(0.5)), 0);

    engine.queue_command(OperatorCommand::SetSpawnRate { per_minute: 30 });
    // Rate change restarts the countdown at t=0.5: next spawn at t=2.5.
    assert_eq!(spawned_count(&engine.advance(1.9)), 0);
    assert_eq!(spawned_count(&engine.advance(0.2)), 1);
    assert_eq!(engine.spawn_rate(), 30);
}

// ---- Selection ----

#[test]
fn test_single_selection_invariant() {
    let mut engine = quiet_engine(0.0);
    let a = engine.spawn_aircraft_at(Position::new(2.0, 2.0), Some(0.0));
    let b = engine.spawn_aircraft_at(Position::new(20.0, 20.0), Some(0.0));

    assert!(engine.select_aircraft(a));
    assert!(engine.select_aircraft(b));
    let snap = engine.snapshot();
    let selected: Vec<u32> = snap.aircraft.iter().filter(|v| v.selected).map(|v| v.id).collect();
    assert_eq!(selected, vec![b]);
    assert_eq!(engine.selected_id(), Some(b));
}

#[test]
fn test_toggle_selection() {
    let mut engine = quiet_engine(0.0);
    let a = engine.spawn_aircraft_at(Position::new(2.0, 2.0), Some(0.0));

    assert!(engine.toggle_selection(a));
    assert_eq!(engine.selected_id(), Some(a));
    assert!(engine.toggle_selection(a));
    assert_eq!(engine.selected_id(), None);
    assert!(engine.snapshot().selected().is_none());
}

#[test]
fn test_cannot_select_missing_or_collided() {
    let mut engine = quiet_engine(0.0);
    assert!(!engine.select_aircraft(99));

    let a = engine.spawn_aircraft_at(Position::new(10.0, 10.0), Some(0.0));
    let b = engine.spawn_aircraft_at(Position::new(10.0, 10.5), Some(0.0));
    engine.tick();

    assert!(!engine.select_aircraft(a));
    assert!(!engine.toggle_selection(b));
    assert_eq!(engine.selected_id(), None);
}

#[test]
fn test_select_command_applies_at_tick_boundary() {
    let mut engine = quiet_engine(0.0);
    let a = engine.spawn_aircraft_at(Position::new(4.0, 4.0), Some(0.0));

    engine.queue_command(OperatorCommand::SelectAircraft { id: a });
    assert_eq!(engine.selected_id(), None, "queued, not applied yet");

    let snap = engine.tick();
    assert!(snap.aircraft_by_id(a).unwrap().selected);
}

// ---- Routing ----

#[test]
fn test_assign_requires_selection() {
    let mut engine = quiet_engine(1.0);
    let a = engine.spawn_aircraft_at(Position::new(4.0, 4.0), Some(0.0));
    let b = engine.spawn_aircraft_at(Position::new(20.0, 4.0), Some(0.0));

    assert!(!engine.assign_waypoint(a, Position::new(10.0, 10.0)));

    engine.select_aircraft(b);
    assert!(!engine.assign_waypoint(a, Position::new(10.0, 10.0)));
    assert!(engine.assign_waypoint(b, Position::new(10.0, 10.0)));

    let snap = engine.snapshot();
    assert_eq!(snap.aircraft_by_id(a).unwrap().waypoints_remaining, 0);
    assert_eq!(snap.aircraft_by_id(b).unwrap().waypoints_remaining, 1);
}

#[test]
fn test_assign_turns_heading_immediately() {
    let mut engine = quiet_engine(1.0);
    let a = engine.spawn_aircraft_at(Position::new(10.0, 10.0), Some(0.0));
    engine.select_aircraft(a);
    engine.assign_waypoint(a, Position::new(10.0, 20.0));

    let heading = engine.snapshot().aircraft_by_id(a).unwrap().heading;
    assert!((heading - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_assign_clamps_click_into_airspace() {
    let mut engine = quiet_engine(1.0);
    let a = engine.spawn_aircraft_at(Position::new(10.0, 10.0), Some(0.0));
    engine.select_aircraft(a);
    engine.assign_waypoint(a, Position::new(-4.0, 45.0));

    let snap = engine.tick();
    let point = snap
        .events
        .iter()
        .find_map(|e| match e {
            SimEvent::WaypointAssigned { point, .. } => Some(*point),
            _ => None,
        })
        .unwrap();
    assert_eq!(point.x, 0.0);
    assert!((point.y - 29.99).abs() < 1e-9);
}

#[test]
fn test_assign_reports_runway_approach() {
    let mut engine = quiet_engine(1.0);
    let a = engine.spawn_aircraft_at(Position::new(2.0, 2.0), Some(0.0));
    engine.select_aircraft(a);
    engine.assign_waypoint(a, Position::new(15.0, 15.0));
    engine.assign_waypoint(a, Position::new(3.0, 3.0));

    let flags: Vec<bool> = engine
        .tick()
        .events
        .iter()
        .filter_map(|e| match e {
            SimEvent::WaypointAssigned { toward_runway, .. } => Some(*toward_runway),
            _ => None,
        })
        .collect();
    assert_eq!(flags, vec![true, false]);
}

#[test]
fn test_assign_to_collided_is_noop() {
    let mut engine = quiet_engine(0.0);
    let a = engine.spawn_aircraft_at(Position::new(10.0, 10.0), Some(0.0));
    engine.spawn_aircraft_at(Position::new(10.0, 10.5), Some(0.0));
    engine.select_aircraft(a);
    engine.tick();

    assert!(!engine.assign_waypoint(a, Position::new(1.0, 1.0)));
    assert_eq!(
        engine.snapshot().aircraft_by_id(a).unwrap().waypoints_remaining,
        0
    );
}

#[test]
fn test_direct_selected_clears_stale_selection() {
    let mut engine = quiet_engine(0.0);
    let a = engine.spawn_aircraft_at(Position::new(10.0, 10.0), Some(0.0));
    engine.spawn_aircraft_at(Position::new(10.0, 10.5), Some(0.0));
    engine.select_aircraft(a);
    engine.tick();
    assert_eq!(engine.selected_id(), Some(a), "collision keeps the selection");

    assert!(!engine.direct_selected(Position::new(5.0, 5.0)));
    assert_eq!(engine.selected_id(), None);
}

#[test]
fn test_direct_selected_routes_selection() {
    let mut engine = quiet_engine(1.0);
    let a = engine.spawn_aircraft_at(Position::new(10.0, 10.0), Some(0.0));
    engine.queue_commands([
        OperatorCommand::SelectAircraft { id: a },
        OperatorCommand::DirectSelected {
            point: Position::new(10.0, 5.0),
        },
    ]);
    let snap = engine.tick();
    let view = snap.aircraft_by_id(a).unwrap();
    assert!((view.position.y - 9.9).abs() < 1e-9, "moved north on the same tick");
    assert_eq!(view.waypoints_remaining, 1);
}

#[test]
fn test_speed_change_takes_effect_next_tick() {
    let mut engine = quiet_engine(0.0);
    let a = engine.spawn_aircraft_at(Position::new(10.0, 10.0), Some(0.0));
    engine.select_aircraft(a);
    engine.assign_waypoint(a, Position::new(20.0, 10.0));

    engine.tick();
    assert_eq!(engine.snapshot().aircraft_by_id(a).unwrap().position.x, 10.0);

    engine.queue_command(OperatorCommand::SetSpeed { tiles_per_sec: 2.0 });
    let snap = engine.tick();
    assert!((snap.aircraft_by_id(a).unwrap().position.x - 10.2).abs() < 1e-9);
    assert_eq!(snap.speed_tiles_per_sec, 2.0);
}

#[test]
fn test_free_flight_continues_after_route() {
    let mut engine = quiet_engine(1.0);
    let a = engine.spawn_aircraft_at(Position::new(5.0, 5.0), Some(FRAC_PI_2));
    engine.select_aircraft(a);
    engine.assign_waypoint(a, Position::new(6.0, 5.0));

    let mut finished = false;
    for _ in 0..15 {
        let snap = engine.tick();
        finished |= snap
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::FinalWaypointReached { id, .. } if *id == a));
    }
    assert!(finished);
    let view = engine.snapshot().aircraft_by_id(a).cloned().unwrap();
    assert!(view.position.x > 6.0, "kept flying east, x = {}", view.position.x);
    assert!((view.position.y - 5.0).abs() < 1e-9);
}

// ---- Collisions ----

#[test]
fn test_collided_aircraft_are_frozen() {
    let mut engine = quiet_engine(0.0);
    let a = engine.spawn_aircraft_at(Position::new(10.0, 10.0), Some(0.0));
    let b = engine.spawn_aircraft_at(Position::new(10.0, 10.5), Some(FRAC_PI_2));
    engine.tick();

    engine.set_speed(3.0);
    let before = engine.snapshot();
    for _ in 0..50 {
        engine.tick();
    }
    let after = engine.snapshot();
    for id in [a, b] {
        let x = before.aircraft_by_id(id).unwrap();
        let y = after.aircraft_by_id(id).unwrap();
        assert_eq!(x.position, y.position);
        assert_eq!(y.state, AircraftState::Collided);
    }
    assert_eq!(after.counters.collision_count, 1);
    assert_eq!(after.counters.active_count, 0);
    assert_eq!(after.counters.fleet_size, 2, "collided aircraft stay in the fleet");
}

#[test]
fn test_two_pairs_collide_in_one_pass() {
    let mut engine = quiet_engine(0.0);
    engine.spawn_aircraft_at(Position::new(5.0, 5.0), Some(0.0));
    engine.spawn_aircraft_at(Position::new(5.2, 5.0), Some(0.0));
    engine.spawn_aircraft_at(Position::new(25.0, 25.0), Some(0.0));
    engine.spawn_aircraft_at(Position::new(25.0, 25.3), Some(0.0));

    let snap = engine.tick();
    assert_eq!(snap.counters.collision_count, 2);
    let collisions: Vec<(u32, u32)> = snap
        .events
        .iter()
        .filter_map(|e| match e {
            SimEvent::Collision { first, second } => Some((*first, *second)),
            _ => None,
        })
        .collect();
    assert_eq!(collisions, vec![(1, 2), (3, 4)]);
}

#[test]
fn test_halt_on_collision_stops_schedules() {
    let mut engine = SimulationEngine::new(SimConfig {
        speed_tiles_per_sec: 0.0,
        spawn_rate_per_min: 60,
        halt_on_collision: true,
        ..Default::default()
    });
    engine.spawn_aircraft_at(Position::new(10.0, 10.0), Some(0.0));
    engine.spawn_aircraft_at(Position::new(10.0, 10.5), Some(0.0));

    let snap = engine.advance(5.0);
    assert_eq!(snap.phase, SimPhase::Halted);
    assert_eq!(engine.time().tick, 1, "stopped after the colliding tick");
    assert_eq!(snap.aircraft.len(), 2, "no scheduled spawns after the halt");
    assert!(!engine.scheduler().is_running());

    engine.queue_command(OperatorCommand::Reset);
    let snap = engine.advance(0.0);
    assert_eq!(snap.phase, SimPhase::Running);
}

// ---- Pause / reset ----

#[test]
fn test_pause_suspends_ticks_and_spawns() {
    let mut engine = SimulationEngine::new(SimConfig {
        spawn_rate_per_min: 60,
        ..Default::default()
    });
    engine.advance(1.0);
    let ticks = engine.time().tick;

    engine.queue_command(OperatorCommand::Pause);
    let snap = engine.advance(10.0);
    assert_eq!(snap.phase, SimPhase::Paused);
    assert_eq!(engine.time().tick, ticks);
    assert_eq!(spawned_count(&snap), 0);

    // A direct tick while paused does not move anything either.
    engine.tick();
    assert_eq!(engine.time().tick, ticks);

    engine.queue_command(OperatorCommand::Resume);
    engine.advance(1.0);
    assert!(engine.time().tick > ticks);
    assert_eq!(engine.phase(), SimPhase::Running);
}

#[test]
fn test_reset_clears_everything() {
    let mut engine = SimulationEngine::new(SimConfig {
        spawn_rate_per_min: 0,
        ..Default::default()
    });
    let a = engine.spawn_aircraft_at(Position::new(10.0, 10.0), Some(0.0));
    engine.spawn_aircraft_at(Position::new(10.0, 10.5), Some(0.0));
    engine.spawn_one();
    engine.select_aircraft(3);
    engine.set_speed(4.0);
    engine.set_spawn_rate(30);
    engine.tick();
    assert_eq!(engine.tally().collisions, 1);
    assert_eq!(a, 1);

    engine.queue_command(OperatorCommand::Reset);
    let snap = engine.tick();
    assert!(snap.aircraft.is_empty());
    assert_eq!(snap.counters.collision_count, 0);
    assert_eq!(snap.counters.landed_count, 0);
    assert_eq!(engine.selected_id(), None);
    assert_eq!(engine.speed(), engine.config().speed_tiles_per_sec);
    assert_eq!(engine.spawn_rate(), 0);
    assert!(snap.events.contains(&SimEvent::Reset));

    // Identity counter restarts.
    assert_eq!(engine.spawn_one(), 1);
}

// ---- Waypoint-only rules ----

fn waypoint_engine(speed: f64) -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        rules: FlightRules::waypoint_only(),
        speed_tiles_per_sec: speed,
        spawn_rate_per_min: 0,
        ..Default::default()
    })
}

#[test]
fn test_waypoint_only_aircraft_wait_for_route() {
    let mut engine = waypoint_engine(1.0);
    let a = engine.spawn_one();
    let start = engine.snapshot().aircraft_by_id(a).unwrap().position;
    assert_eq!(start, start.snapped_to_grid(), "spawn is grid-snapped");

    for _ in 0..30 {
        engine.tick();
    }
    assert_eq!(engine.snapshot().aircraft_by_id(a).unwrap().position, start);
}

#[test]
fn test_waypoint_only_holds_after_route() {
    let mut engine = waypoint_engine(1.0);
    let a = engine.spawn_aircraft_at(Position::new(3.0, 3.0), None);
    engine.select_aircraft(a);
    engine.assign_waypoint(a, Position::new(5.4, 3.7));

    for _ in 0..60 {
        engine.tick();
    }
    let view = engine.snapshot().aircraft_by_id(a).cloned().unwrap();
    assert_eq!(view.position, Position::new(5.0, 3.0), "click snapped to grid");
    assert_eq!(view.waypoints_remaining, 0);
    assert_eq!(view.state, AircraftState::Flying);
}

#[test]
fn test_waypoint_only_appends_legs() {
    let mut engine = waypoint_engine(1.0);
    let a = engine.spawn_aircraft_at(Position::new(3.0, 3.0), None);
    engine.select_aircraft(a);
    engine.assign_waypoint(a, Position::new(8.0, 3.0));
    engine.assign_waypoint(a, Position::new(8.0, 8.0));
    assert_eq!(
        engine.snapshot().aircraft_by_id(a).unwrap().waypoints_remaining,
        2
    );

    for _ in 0..120 {
        engine.tick();
    }
    assert_eq!(
        engine.snapshot().aircraft_by_id(a).unwrap().position,
        Position::new(8.0, 8.0)
    );
}

#[test]
fn test_waypoint_only_lands_on_runway_arrival() {
    let mut engine = waypoint_engine(1.0);
    let a = engine.spawn_aircraft_at(Position::new(10.0, 15.0), None);
    engine.select_aircraft(a);
    engine.assign_waypoint(a, Position::new(15.5, 15.5));

    // Passing within the landing radius is not enough under this rule.
    for _ in 0..45 {
        engine.tick();
    }
    assert_eq!(
        engine.snapshot().aircraft_by_id(a).unwrap().state,
        AircraftState::Flying
    );

    for _ in 0..20 {
        engine.tick();
    }
    let snap = engine.snapshot();
    assert!(snap.aircraft_by_id(a).is_none());
    assert_eq!(snap.counters.landed_count, 1);
}

// ---- Config ----

#[test]
fn test_config_from_json_defaults() {
    let config = SimConfig::from_json_str(r#"{"seed": 7, "spawn_rate_per_min": 0}"#).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.spawn_rate_per_min, 0);
    assert_eq!(config.rules, FlightRules::free_flight());
    assert_eq!(config.tick_interval_secs, 0.1);
}

#[test]
fn test_config_from_json_rules() {
    let json = r#"{
        "rules": {
            "assignment": "Append",
            "exhaustion": "Hold",
            "landing": "WaypointArrival",
            "snap_to_grid": true
        }
    }"#;
    let config = SimConfig::from_json_str(json).unwrap();
    assert_eq!(config.rules, FlightRules::waypoint_only());
}

#[test]
fn test_config_rejects_invalid_values() {
    let err = SimConfig::from_json_str(r#"{"speed_tiles_per_sec": -1.0}"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid(ControlError::InvalidSpeed(_))
    ));

    let err = SimConfig::from_json_str(r#"{"tick_interval_secs": 0.0}"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid(ControlError::InvalidTickInterval(_))
    ));

    assert!(matches!(
        SimConfig::from_json_str("not json"),
        Err(ConfigError::Parse(_))
    ));
}

// ---- World ----

#[test]
fn test_world_holds_one_entity_per_aircraft() {
    let mut engine = quiet_engine(0.0);
    for _ in 0..5 {
        engine.spawn_one();
    }
    let count = {
        let mut q = engine.world().query::<&AircraftIdent>();
        q.iter().count()
    };
    assert_eq!(count, 5);
}
