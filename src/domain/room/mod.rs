//! Room domain module.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RoomId;

/// A room as returned by the task API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub id: RoomId,
    pub name: String,
}

impl RoomInfo {
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
