//! Dialog-specific error types.

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::ApiError;

/// Errors surfaced by dialog handlers to the hosting loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    /// A call to the task API failed. Not retried.
    #[error("remote call failed: {0}")]
    Remote(#[from] ApiError),

    /// Input failed validation after it was accepted by a prompt.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The session was read before its first refresh.
    #[error("snapshot requested before the first refresh")]
    SnapshotNotLoaded,

    /// The dialog state does not allow the requested step.
    #[error("invalid dialog state: {0}")]
    InvalidState(String),

    /// A click named a button the current screen does not have.
    #[error("unknown button: {0}")]
    UnknownButton(String),
}

impl DialogError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        DialogError::InvalidState(message.into())
    }

    pub fn unknown_button(id: impl Into<String>) -> Self {
        DialogError::UnknownButton(id.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DialogError::Remote(_) => ErrorCode::RemoteCallFailed,
            DialogError::Validation(err) => err.code(),
            DialogError::SnapshotNotLoaded => ErrorCode::SnapshotNotLoaded,
            DialogError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            DialogError::UnknownButton(_) => ErrorCode::UnknownButton,
        }
    }
}
