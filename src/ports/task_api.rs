//! Task API port - Interface to the remote task/room service.
//!
//! Every read and write of the dialog layer goes through this port. The
//! dialogs never interpret failures beyond the variants below; they either
//! propagate them or, at start routing, fall back to the welcome screen.

use async_trait::async_trait;

use crate::domain::foundation::{OrderId, RoomId, TaskId, UserId};
use crate::domain::room::RoomInfo;
use crate::domain::task::{OrderInfo, TaskInfo, TaskPatch};

/// Errors returned by the task API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The caller is not allowed to use the API.
    #[error("unauthorized")]
    Unauthorized,

    /// The requested entity does not exist.
    #[error("{entity} not found")]
    NotFound {
        /// Kind of entity that was looked up.
        entity: &'static str,
    },

    /// The service is down or returned a server error.
    #[error("task api unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Unexpected HTTP status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn not_found(entity: &'static str) -> Self {
        ApiError::NotFound { entity }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        ApiError::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ApiError::Parse(message.into())
    }
}

/// Outcome of registering a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRegistration {
    /// The user did not exist and was created.
    Created,
    /// The user was registered earlier; nothing changed.
    AlreadyExists,
}

/// Port for the remote task/room service.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Registers a chat user. Registering an existing user is not an error.
    async fn create_user(&self, user: UserId) -> Result<UserRegistration, ApiError>;

    /// Returns the room the user belongs to, or `None` if the user has no room.
    async fn get_room_info(&self, user: UserId) -> Result<Option<RoomInfo>, ApiError>;

    /// Creates a room owned by the user and returns its id.
    async fn create_room(&self, name: &str, user: UserId) -> Result<RoomId, ApiError>;

    /// Fetches the current fields of a task.
    async fn get_task_info(&self, task: TaskId, user: UserId) -> Result<TaskInfo, ApiError>;

    /// Fetches the executor order of a task.
    async fn get_order_info(&self, order: OrderId, user: UserId) -> Result<OrderInfo, ApiError>;

    /// Applies a partial update to a task.
    async fn modify_task(&self, patch: &TaskPatch, user: UserId) -> Result<(), ApiError>;

    /// Deletes a task.
    async fn delete_task(&self, task: TaskId, user: UserId) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn TaskApi) {}

    #[test]
    fn not_found_names_entity() {
        assert_eq!(ApiError::not_found("task").to_string(), "task not found");
    }

    #[test]
    fn status_error_includes_code_and_body() {
        let err = ApiError::Status {
            status: 418,
            body: "teapot".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 418: teapot");
    }

    #[test]
    fn timeout_error_displays_seconds() {
        let err = ApiError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10s"));
    }
}
