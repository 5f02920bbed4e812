//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the dialog layer and the outside world. Adapters implement these ports.
//!
//! - `TaskApi` - Remote task/room service used for every read and write

mod task_api;

pub use task_api::{ApiError, TaskApi, UserRegistration};
