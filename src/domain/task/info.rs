//! Task values exchanged with the task API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderId, TaskId, UserId};

/// Fields of a task as last fetched from the task API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInfo {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDateTime,
    /// Repeat period in days.
    pub period: u32,
    #[serde(default)]
    pub order_id: Option<OrderId>,
}

/// A room member assigned to execute a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorInfo {
    pub id: UserId,
    pub fullname: String,
}

/// Executor order of a task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderInfo {
    pub users: Vec<ExecutorInfo>,
}

/// Partial update of a task. Only fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

impl TaskPatch {
    /// Creates an empty patch for the given task.
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            start_date: None,
            period: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDateTime) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_period(mut self, period: u32) -> Self {
        self.period = Some(period);
        self
    }

    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.period.is_none()
    }

    /// Applies the set fields to a task in place.
    pub fn apply_to(&self, task: &mut TaskInfo) {
        if let Some(name) = &self.name {
            task.name = name.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(start_date) = self.start_date {
            task.start_date = start_date;
        }
        if let Some(period) = self.period {
            task.period = period;
        }
    }
}
