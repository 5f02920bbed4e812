//! Intent tags recorded when a screen starts a sub-interaction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why a sub-interaction was started.
///
/// The parent screen records exactly one intent per start and consults it when
/// the result comes back to decide which mutation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CreateRoom,
    EditName,
    EditDescription,
    EditStartDate,
    EditPeriod,
    Delete,
    Invitations,
}

impl Intent {
    /// Every known intent.
    pub const ALL: [Intent; 7] = [
        Intent::CreateRoom,
        Intent::EditName,
        Intent::EditDescription,
        Intent::EditStartDate,
        Intent::EditPeriod,
        Intent::Delete,
        Intent::Invitations,
    ];

    /// Wire name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::CreateRoom => "create_room",
            Intent::EditName => "edit_name",
            Intent::EditDescription => "edit_description",
            Intent::EditStartDate => "edit_start_date",
            Intent::EditPeriod => "edit_period",
            Intent::Delete => "delete",
            Intent::Invitations => "invitations",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag string that names no known intent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown intent tag: {0}")]
pub struct UnknownIntent(pub String);

impl FromStr for Intent {
    type Err = UnknownIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| UnknownIntent(s.to_string()))
    }
}
