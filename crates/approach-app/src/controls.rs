//! Control surface for a front end.
//!
//! These functions bridge front-end requests to the simulation thread via
//! the command channel. Control inputs are validated here, so the engine
//! only ever sees well-formed commands.

use approach_core::commands::{validate_command, OperatorCommand};
use approach_core::state::SimSnapshot;
use approach_sim::engine::SimConfig;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, LoopCommand};

/// Start the simulation. Spawns the sim thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), AppError> {
    let mut running = state.running.lock()?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }
    config.validate()?;

    let cmd_tx = game_loop::spawn_sim_loop(config, state.latest_snapshot.clone())?;

    let mut tx_lock = state.command_tx.lock()?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(())
}

/// Send an operator command to the simulation.
pub fn send_command(state: &AppState, command: OperatorCommand) -> Result<(), AppError> {
    validate_command(&command)?;

    let tx_lock = state.command_tx.lock()?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(LoopCommand::Operator(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotStarted),
    }
}

/// Latest snapshot, for polling and initial state. `None` before the first frame.
pub fn latest_snapshot(state: &AppState) -> Result<Option<SimSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock()?;
    Ok(lock.clone())
}

/// Stop the sim thread. The last snapshot stays readable.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock()?;
    let mut tx_lock = state.command_tx.lock()?;

    let tx = tx_lock.take().ok_or(AppError::NotStarted)?;
    // A loop that already exited has dropped its receiver; that's fine.
    let _ = tx.send(LoopCommand::Shutdown);
    *running = false;

    Ok(())
}
