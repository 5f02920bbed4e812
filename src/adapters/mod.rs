//! Adapters - Implementations of port interfaces and front ends.
//!
//! - **api** - TaskApi over HTTP and in memory
//! - **console** - Line-based conversation loop

pub mod api;
pub mod console;
