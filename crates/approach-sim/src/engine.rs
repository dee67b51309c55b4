//! Simulation engine: the tick driver of the air-traffic simulation.
//!
//! `SimulationEngine` owns the hecs ECS world, processes operator commands,
//! runs all systems, drives the tick and spawn schedules, and produces
//! `SimSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use approach_core::commands::{validate_speed, validate_spawn_rate, OperatorCommand};
use approach_core::components::{AircraftIdent, FlightStatus, FreeFlight, Heading, Route, Selection};
use approach_core::constants::*;
use approach_core::error::{ConfigError, ControlError};
use approach_core::events::SimEvent;
use approach_core::enums::SimPhase;
use approach_core::geometry::Airspace;
use approach_core::rules::FlightRules;
use approach_core::state::SimSnapshot;
use approach_core::types::{Position, SimTime};

use approach_flight::{motion, routing};

use crate::scheduler::{spawn_period_for, ScheduledTask, Scheduler};
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::tally::FleetTally;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub rules: FlightRules,
    /// Initial fleet speed; also the value restored by a reset.
    pub speed_tiles_per_sec: f64,
    /// Initial spawn rate; also the value restored by a reset.
    pub spawn_rate_per_min: u32,
    /// Fixed simulated time per tick.
    pub tick_interval_secs: f64,
    /// Stop both schedules after the first collision.
    pub halt_on_collision: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rules: FlightRules::default(),
            speed_tiles_per_sec: DEFAULT_SPEED_TILES_PER_SEC,
            spawn_rate_per_min: DEFAULT_SPAWN_RATE_PER_MIN,
            tick_interval_secs: TICK_INTERVAL_SECS,
            halt_on_collision: false,
        }
    }
}

impl SimConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ControlError> {
        validate_speed(self.speed_tiles_per_sec)?;
        validate_spawn_rate(self.spawn_rate_per_min)?;
        if !(self.tick_interval_secs.is_finite() && self.tick_interval_secs > 0.0) {
            return Err(ControlError::InvalidTickInterval(self.tick_interval_secs));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    airspace: Airspace,
    time: SimTime,
    phase: SimPhase,
    speed_tiles_per_sec: f64,
    spawn_rate_per_min: u32,
    rng: ChaCha8Rng,
    next_aircraft_id: u32,
    selected: Option<Entity>,
    tally: FleetTally,
    scheduler: Scheduler,
    command_queue: VecDeque<OperatorCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. Both schedules
    /// start running immediately.
    pub fn new(config: SimConfig) -> Self {
        let scheduler = Scheduler::new(
            config.tick_interval_secs,
            spawn_period_for(config.spawn_rate_per_min),
        );
        Self {
            world: World::new(),
            airspace: Airspace::default(),
            time: SimTime::default(),
            phase: SimPhase::Running,
            speed_tiles_per_sec: config.speed_tiles_per_sec,
            spawn_rate_per_min: config.spawn_rate_per_min,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_aircraft_id: 0,
            selected: None,
            tally: FleetTally::default(),
            scheduler,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one fixed tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.tick_by(self.config.tick_interval_secs)
    }

    /// Advance the simulation by one tick of `dt_secs` simulated seconds.
    /// Does not spawn; spawning belongs to the spawn schedule or `spawn_one`.
    pub fn tick_by(&mut self, dt_secs: f64) -> SimSnapshot {
        self.process_commands();
        self.run_tick(dt_secs);
        self.take_snapshot()
    }

    /// Let `elapsed_secs` of scheduler time pass, running every tick and
    /// spawn invocation that falls due, each to completion, in due order.
    pub fn advance(&mut self, elapsed_secs: f64) -> SimSnapshot {
        self.process_commands();

        let until = self.scheduler.now_secs() + elapsed_secs.max(0.0);
        while let Some(task) = self.scheduler.pop_due(until) {
            match task {
                ScheduledTask::Tick => self.run_tick(self.config.tick_interval_secs),
                ScheduledTask::Spawn => {
                    self.spawn_one();
                }
            }
        }
        self.scheduler.advance_to(until);

        self.take_snapshot()
    }

    /// Current state without advancing anything. Pending events stay queued.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.snapshot_context(), self.events.clone())
    }

    // --- Operator entry points ---
    //
    // All of these take `&mut self`, so they can only ever run between ticks.

    /// Admit one aircraft at a random airspace edge. Returns its id.
    pub fn spawn_one(&mut self) -> u32 {
        let id = self.allocate_id();
        systems::spawner::spawn_from_edge(
            &mut self.world,
            &mut self.rng,
            &self.airspace,
            &self.config.rules,
            id,
            &mut self.events,
        );
        id
    }

    /// Place an aircraft at `position` (clamped into the airspace). With no
    /// heading given, it gets the same initial heading a spawned aircraft would.
    pub fn spawn_aircraft_at(&mut self, position: Position, heading: Option<f64>) -> u32 {
        let id = self.allocate_id();
        let heading = heading.unwrap_or_else(|| {
            systems::spawner::initial_heading(
                &mut self.rng,
                &self.airspace,
                &self.config.rules,
                &position,
            )
        });
        systems::spawner::spawn_at(
            &mut self.world,
            &self.airspace,
            &self.config.rules,
            id,
            position,
            heading,
            &mut self.events,
        );
        id
    }

    /// Select an aircraft, deselecting any other. Returns `false` (and changes
    /// nothing) if the aircraft does not exist or has collided.
    pub fn select_aircraft(&mut self, id: u32) -> bool {
        let Some(entity) = self.selectable(id) else {
            return false;
        };
        self.set_selection(Some(entity));
        if let Some(callsign) = self.callsign_of(entity) {
            log::debug!("{callsign} selected");
        }
        true
    }

    /// Pointer-click semantics: select `id`, or deselect it if it already is.
    pub fn toggle_selection(&mut self, id: u32) -> bool {
        let Some(entity) = self.selectable(id) else {
            return false;
        };
        if self.selected == Some(entity) {
            self.set_selection(None);
        } else {
            self.set_selection(Some(entity));
        }
        true
    }

    pub fn deselect(&mut self) {
        self.set_selection(None);
    }

    /// Route the selected aircraft `id` toward `point` (clamped into the
    /// airspace). A no-op returning `false` unless `id` is the current
    /// selection and is still flying.
    pub fn assign_waypoint(&mut self, id: u32, point: Position) -> bool {
        let Some(entity) = self.selected else {
            return false;
        };
        if self.id_of(entity) != Some(id) {
            return false;
        }

        let mut point = self.airspace.clamp(point);
        if self.config.rules.snap_to_grid {
            point = point.snapped_to_grid();
        }

        let assignment = self.config.rules.assignment;
        let Ok((ident, position, heading, status, route, free_flight)) =
            self.world.query_one_mut::<(
                &AircraftIdent,
                &Position,
                &mut Heading,
                &FlightStatus,
                &mut Route,
                &mut FreeFlight,
            )>(entity)
        else {
            return false;
        };
        if status.state.is_terminal() {
            return false;
        }

        routing::assign(route, free_flight, point, assignment);
        motion::face_current_target(position, heading, route);

        let toward_runway = self.airspace.runway.is_near(&point, LANDING_RADIUS);
        if toward_runway {
            log::info!(
                "{} directed toward runway at ({:.1}, {:.1})",
                ident.callsign,
                point.x,
                point.y
            );
        } else {
            log::info!(
                "{} directed to ({:.1}, {:.1})",
                ident.callsign,
                point.x,
                point.y
            );
        }
        self.events.push(SimEvent::WaypointAssigned {
            id,
            point,
            toward_runway,
        });
        true
    }

    /// Airspace click: route the selected aircraft to `point`. A selection
    /// that can no longer be routed is cleared instead.
    pub fn direct_selected(&mut self, point: Position) -> bool {
        let Some(entity) = self.selected else {
            return false;
        };
        let routable = self
            .world
            .get::<&FlightStatus>(entity)
            .map(|status| !status.state.is_terminal())
            .unwrap_or(false);
        match self.id_of(entity) {
            Some(id) if routable => self.assign_waypoint(id, point),
            _ => {
                self.set_selection(None);
                false
            }
        }
    }

    /// Set the fleet-wide speed. Takes effect on the next tick.
    pub fn set_speed(&mut self, tiles_per_sec: f64) {
        if !(tiles_per_sec.is_finite() && tiles_per_sec >= 0.0) {
            log::warn!("ignoring invalid speed {tiles_per_sec}");
            return;
        }
        self.speed_tiles_per_sec = tiles_per_sec;
        log::debug!("speed set to {tiles_per_sec:.1} tiles/sec");
    }

    /// Set the spawn rate. The next spawn comes one new period from now;
    /// zero suspends spawning without stopping ticks.
    pub fn set_spawn_rate(&mut self, per_minute: u32) {
        self.spawn_rate_per_min = per_minute;
        let period = spawn_period_for(per_minute);
        self.scheduler.set_spawn_period(period);
        match period {
            Some(secs) => log::info!("spawning aircraft every {secs:.1} seconds"),
            None => log::info!("spawning paused (rate set to 0)"),
        }
        self.events.push(SimEvent::SpawnRateChanged { per_minute });
    }

    pub fn pause(&mut self) {
        if self.phase == SimPhase::Running {
            self.scheduler.halt();
            self.phase = SimPhase::Paused;
            log::info!("simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.phase == SimPhase::Paused {
            self.scheduler.resume();
            self.phase = SimPhase::Running;
            log::info!("simulation resumed");
        }
    }

    /// Halt both schedules, clear the fleet, counters and selection, restore
    /// the configured speed and spawn rate, then restart both schedules.
    pub fn reset(&mut self) {
        log::info!("resetting simulation");
        self.scheduler.halt();

        self.world.clear();
        self.selected = None;
        self.tally = FleetTally::default();
        self.next_aircraft_id = 0;
        self.despawn_buffer.clear();
        self.events.clear();
        self.time = SimTime::default();
        self.speed_tiles_per_sec = self.config.speed_tiles_per_sec;
        self.spawn_rate_per_min = self.config.spawn_rate_per_min;

        self.scheduler.restart(
            self.config.tick_interval_secs,
            spawn_period_for(self.spawn_rate_per_min),
        );
        self.phase = SimPhase::Running;
        self.events.push(SimEvent::Reset);
        log::info!("simulation reset complete");
    }

    // --- Read-only accessors ---

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn speed(&self) -> f64 {
        self.speed_tiles_per_sec
    }

    pub fn spawn_rate(&self) -> u32 {
        self.spawn_rate_per_min
    }

    pub fn tally(&self) -> FleetTally {
        self.tally
    }

    pub fn airspace(&self) -> &Airspace {
        &self.airspace
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Id of the currently selected aircraft, if any.
    pub fn selected_id(&self) -> Option<u32> {
        self.selected.and_then(|entity| self.id_of(entity))
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    // --- Internals ---

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command.
    fn handle_command(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::SelectAircraft { id } => {
                self.select_aircraft(id);
            }
            OperatorCommand::ToggleSelection { id } => {
                self.toggle_selection(id);
            }
            OperatorCommand::Deselect => self.deselect(),
            OperatorCommand::AssignWaypoint { aircraft_id, point } => {
                self.assign_waypoint(aircraft_id, point);
            }
            OperatorCommand::DirectSelected { point } => {
                self.direct_selected(point);
            }
            OperatorCommand::SetSpeed { tiles_per_sec } => self.set_speed(tiles_per_sec),
            OperatorCommand::SetSpawnRate { per_minute } => self.set_spawn_rate(per_minute),
            OperatorCommand::SpawnOne => {
                self.spawn_one();
            }
            OperatorCommand::Pause => self.pause(),
            OperatorCommand::Resume => self.resume(),
            OperatorCommand::Reset => self.reset(),
        }
    }

    /// Move, retire landed aircraft, then scan separation. Only while running.
    fn run_tick(&mut self, dt_secs: f64) {
        if self.phase != SimPhase::Running {
            return;
        }

        // 1. Movement integration + landing detection
        systems::movement::run(
            &mut self.world,
            self.speed_tiles_per_sec * dt_secs,
            &self.airspace,
            &self.config.rules,
            &mut self.events,
        );
        // 2. Retire landed aircraft
        systems::landing::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.tally,
            &mut self.selected,
            &mut self.events,
        );
        // 3. Separation scan over the whole fleet
        let collisions = systems::proximity::run(&mut self.world, &mut self.tally, &mut self.events);

        self.time.advance(dt_secs);

        if collisions > 0 && self.config.halt_on_collision {
            self.scheduler.halt();
            self.phase = SimPhase::Halted;
            log::warn!("simulation halted after collision");
        }
    }

    fn take_snapshot(&mut self) -> SimSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.snapshot_context(), events)
    }

    fn snapshot_context(&self) -> SnapshotContext {
        SnapshotContext {
            time: self.time,
            phase: self.phase,
            speed_tiles_per_sec: self.speed_tiles_per_sec,
            spawn_rate_per_min: self.spawn_rate_per_min,
            runway: self.airspace.runway,
            tally: self.tally,
        }
    }

    fn allocate_id(&mut self) -> u32 {
        self.next_aircraft_id += 1;
        self.next_aircraft_id
    }

    fn find_aircraft(&self, id: u32) -> Option<Entity> {
        self.world
            .query::<&AircraftIdent>()
            .iter()
            .find(|(_, ident)| ident.id == id)
            .map(|(entity, _)| entity)
    }

    /// An aircraft that exists and has not collided.
    fn selectable(&self, id: u32) -> Option<Entity> {
        let entity = self.find_aircraft(id)?;
        let status = self.world.get::<&FlightStatus>(entity).ok()?;
        (!status.state.is_terminal()).then_some(entity)
    }

    fn id_of(&self, entity: Entity) -> Option<u32> {
        self.world.get::<&AircraftIdent>(entity).ok().map(|ident| ident.id)
    }

    fn callsign_of(&self, entity: Entity) -> Option<String> {
        self.world
            .get::<&AircraftIdent>(entity)
            .ok()
            .map(|ident| ident.callsign.clone())
    }

    /// Move the selection, keeping at most one `Selection` flag set.
    fn set_selection(&mut self, entity: Option<Entity>) {
        if let Some(previous) = self.selected.take() {
            if let Ok(mut selection) = self.world.get::<&mut Selection>(previous) {
                selection.selected = false;
            }
        }
        if let Some(next) = entity {
            if let Ok(mut selection) = self.world.get::<&mut Selection>(next) {
                selection.selected = true;
                self.selected = Some(next);
            }
        }
    }
}
