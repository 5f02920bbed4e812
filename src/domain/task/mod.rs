//! Task domain module.
//!
//! Values describing tasks as the task API returns them, the partial
//! update sent back, and the cached snapshot a task view renders.

mod info;
mod snapshot;

pub use info::{ExecutorInfo, OrderInfo, TaskInfo, TaskPatch};
pub use snapshot::TaskSnapshot;

/// Format of start dates shown to and typed by users.
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";
