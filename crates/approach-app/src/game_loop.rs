//! Simulation thread: drives the engine against the wall clock.
//!
//! The engine is created inside the thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc`; snapshots are stored in shared
//! state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use approach_core::constants::MAX_CATCH_UP_SECS;
use approach_core::state::SimSnapshot;
use approach_sim::engine::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::state::LoopCommand;

/// Spawns the simulation loop in a new thread.
///
/// Returns the command sender for the control surface to use.
pub fn spawn_sim_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
) -> Result<mpsc::Sender<LoopCommand>, AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("approach-sim-loop".into())
        .spawn(move || {
            run_sim_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// The simulation loop. Runs until Shutdown or channel disconnect.
fn run_sim_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) {
    let idle = Duration::from_secs_f64(config.tick_interval_secs);
    let mut engine = SimulationEngine::new(config);
    let mut last_frame = Instant::now();
    log::info!("simulation loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Operator(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("simulation loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Run everything that fell due since the last frame
        let now = Instant::now();
        let elapsed = catch_up_secs(now.duration_since(last_frame));
        last_frame = now;
        let snapshot = engine.advance(elapsed);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick or spawn is due
        let wait = engine
            .scheduler()
            .next_due_in()
            .map(Duration::from_secs_f64)
            .unwrap_or(idle);
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }
}

/// Wall-clock time to simulate for one frame. Capped so a stalled thread
/// doesn't come back to a burst of ticks.
fn catch_up_secs(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64().min(MAX_CATCH_UP_SECS)
}
