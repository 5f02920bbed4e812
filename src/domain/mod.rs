//! Domain layer containing the dialog protocol and the values it moves.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, errors, state machine trait)
//! - `task` - Task values, partial updates, and the cached task snapshot
//! - `room` - Room values
//! - `dialog` - Intents, prompts, confirmations, session context, dispatcher

pub mod dialog;
pub mod foundation;
pub mod room;
pub mod task;
