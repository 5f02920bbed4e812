//! Cached view of a task and its executors.

use crate::domain::task::{ExecutorInfo, TaskInfo, DATE_FORMAT};

/// Last fetched state of a task together with its executor order.
///
/// Never edited locally: every mutation happens remotely and is followed by
/// a fresh fetch that replaces the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSnapshot {
    pub task: TaskInfo,
    /// `None` when the task has no executor order.
    pub executors: Option<Vec<ExecutorInfo>>,
}

impl TaskSnapshot {
    pub fn new(task: TaskInfo, executors: Option<Vec<ExecutorInfo>>) -> Self {
        Self { task, executors }
    }

    /// Start date in the format users type it in.
    pub fn start_date_repr(&self) -> String {
        self.task.start_date.format(DATE_FORMAT).to_string()
    }

    /// Renders the task view body.
    pub fn render_text(&self) -> String {
        let mut lines = vec![
            format!("Name: {}", self.task.name),
            format!("Start date: {}", self.start_date_repr()),
            format!("Period (in days): {}", self.task.period),
        ];

        if !self.task.description.is_empty() {
            lines.push(format!("Description: {}", self.task.description));
        }

        if let Some(executors) = self.executors.as_ref().filter(|e| !e.is_empty()) {
            lines.push("Order:".to_string());
            lines.extend(
                executors
                    .iter()
                    .enumerate()
                    .map(|(pos, item)| format!("{}) {}", pos + 1, item.fullname)),
            );
        }

        lines.join("\n")
    }
}
