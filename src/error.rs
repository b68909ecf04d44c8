//! Error types for the async helpers

use thiserror::Error;
use tokio::sync::oneshot;

/// Error types for stream construction and executor tasks
#[derive(Debug, Error)]
pub enum RipixError {
    /// Invalid input parameters (e.g. a zero range step)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Executor task ended without sending its result
    #[error("Executor task cancelled: {0}")]
    TaskCancelled(#[from] oneshot::error::RecvError),
}

/// Convenience result alias for the async helpers
pub type RipixResult<T> = Result<T, RipixError>;

impl RipixError {
    /// Shorthand for an [`RipixError::InvalidArgument`] with a message.
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        RipixError::InvalidArgument(msg.into())
    }
}
