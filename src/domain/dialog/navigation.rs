//! Navigation requests returned by screen handlers to the dialog host.

use crate::domain::foundation::TaskId;
use crate::domain::room::RoomInfo;

use super::confirmation::ConfirmationSpec;
use super::intent::Intent;
use super::prompt::PromptSpec;

/// What the host should do after a handler ran.
#[derive(Debug, Clone)]
pub enum Navigation {
    /// Show the current screen again as a fresh message.
    Redisplay,
    /// Leave everything as it is.
    Unchanged,
    /// Open a prompt on top of the current screen.
    Prompt { intent: Intent, spec: PromptSpec },
    /// Open a confirmation on top of the current screen.
    Confirm {
        intent: Intent,
        spec: ConfirmationSpec,
    },
    /// Open the room view, optionally discarding the whole stack first.
    OpenRoom { room: RoomInfo, reset_stack: bool },
    /// Open the task view for a task.
    OpenTask { task_id: TaskId },
    /// Open the incoming invitations list.
    OpenInvitations { intent: Intent },
    /// Close the current screen.
    Done,
}

impl Navigation {
    /// The intent carried by a sub-interaction start, if this is one.
    pub fn intent(&self) -> Option<Intent> {
        match self {
            Navigation::Prompt { intent, .. }
            | Navigation::Confirm { intent, .. }
            | Navigation::OpenInvitations { intent } => Some(*intent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_interaction_starts_carry_intent() {
        let nav = Navigation::Prompt {
            intent: Intent::EditName,
            spec: PromptSpec::new("a new name"),
        };
        assert_eq!(nav.intent(), Some(Intent::EditName));

        let nav = Navigation::OpenInvitations {
            intent: Intent::Invitations,
        };
        assert_eq!(nav.intent(), Some(Intent::Invitations));
    }

    #[test]
    fn plain_navigation_has_no_intent() {
        assert_eq!(Navigation::Redisplay.intent(), None);
        assert_eq!(Navigation::Done.intent(), None);
    }
}
