//! Task API Adapters
//!
//! Implementations of the TaskApi port.
//!
//! - **HttpTaskApi** - Talks to the task service over HTTP/JSON
//! - **InMemoryTaskApi** - Keeps everything in memory (testing/offline runs)

mod http_client;
mod in_memory;

pub use http_client::{HttpApiConfig, HttpTaskApi};
pub use in_memory::{ApiCall, ApiOperation, InMemoryTaskApi};
