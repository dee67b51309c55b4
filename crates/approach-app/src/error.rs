use thiserror::Error;

use approach_core::error::ControlError;

/// Failures of the host surface. The simulation itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("simulation not started")]
    NotStarted,

    #[error("simulation already running")]
    AlreadyRunning,

    #[error("simulation loop has stopped")]
    ChannelClosed,

    #[error("shared state lock poisoned")]
    LockPoisoned,

    #[error("failed to spawn simulation thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error(transparent)]
    Control(#[from] ControlError),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}
