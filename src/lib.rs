//! Taskroom Bot - chat dialogs for shared household tasks
//!
//! Users start the bot, land in their room (or on a welcome screen), and
//! view or edit tasks. Screens collect input through prompts and
//! confirmations; a dispatcher turns each result into a task API call.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
