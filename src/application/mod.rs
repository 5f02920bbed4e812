//! Application layer - screen handlers and the dialog navigator.
//!
//! Handlers own the behavior of one screen each; the navigator hosts the
//! per-conversation stack and routes events and sub-interaction results.

pub mod handlers;
mod navigator;

pub use navigator::{DialogNavigator, FrameKind, NavigatorOutput, UserEvent};
