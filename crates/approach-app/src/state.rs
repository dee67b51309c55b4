//! Application state shared between the control surface and the sim thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use approach_core::commands::OperatorCommand;
use approach_core::state::SimSnapshot;

/// Commands sent from the control surface to the simulation thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the simulation engine.
    Operator(OperatorCommand),
    /// Shut down the simulation thread gracefully.
    Shutdown,
}

/// Shared host state. `Send + Sync`, so a front end can hold it globally.
///
/// - `mpsc::Sender` sits behind a `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for things that don't exist before `start_simulation`
/// - `Arc<Mutex<...>>` for the latest snapshot, shared with the sim thread
pub struct AppState {
    /// Channel sender into the sim thread. `None` until started.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot for polling. Written by the sim thread every iteration.
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
