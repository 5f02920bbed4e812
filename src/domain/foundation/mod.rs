//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types, and the state machine trait
//! that form the vocabulary of the bot's dialog layer.

mod errors;
mod ids;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{OrderId, RoomId, SessionId, TaskId, UserId};
pub use state_machine::StateMachine;
