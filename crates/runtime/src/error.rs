//! Errors surfaced by the runtime host.

use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The worker task is gone; no more actions can be submitted.
    #[error("runtime is not running")]
    NotRunning,

    #[error("worker task failed to join: {0}")]
    WorkerJoin(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
