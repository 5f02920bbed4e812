//! Console front end
//!
//! Drives a [`DialogNavigator`](crate::application::DialogNavigator) from
//! line-based input, standing in for a chat transport.

mod runner;

pub use runner::{parse_line, render_output, run_console, ConsoleCommand, ConsoleError};
