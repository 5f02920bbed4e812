//! Confirmation sub-interaction - asks a yes/no question.

use super::outcome::Outcome;
use super::prompt::CANCEL_BUTTON_ID;
use super::screen::{Button, Screen};

pub const YES_BUTTON_ID: &str = "yes_button";
pub const NO_BUTTON_ID: &str = "no_button";

/// The action being confirmed and the notice shown when it is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationSpec {
    /// Completes "Are you sure you want to ...?", e.g. "delete the task".
    pub action: String,
    pub yes_message: String,
}

impl ConfirmationSpec {
    pub fn new(action: impl Into<String>, yes_message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            yes_message: yes_message.into(),
        }
    }
}

/// The user's answer plus any notice to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationReply {
    pub outcome: Outcome<bool>,
    pub notice: Option<String>,
}

/// An open confirmation.
#[derive(Debug, Clone)]
pub struct Confirmation {
    spec: ConfirmationSpec,
}

impl Confirmation {
    pub fn start(spec: ConfirmationSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &ConfirmationSpec {
        &self.spec
    }

    pub fn render(&self) -> Screen {
        Screen::new(format!("Are you sure you want to {}?", self.spec.action))
            .with_row([
                Button::new(YES_BUTTON_ID, "Yes"),
                Button::new(NO_BUTTON_ID, "No"),
            ])
            .with_row([Button::new(CANCEL_BUTTON_ID, "Cancel")])
    }

    pub fn answer(self, yes: bool) -> ConfirmationReply {
        ConfirmationReply {
            outcome: Outcome::Value(yes),
            notice: yes.then(|| self.spec.yes_message),
        }
    }

    pub fn cancel(self) -> ConfirmationReply {
        ConfirmationReply {
            outcome: Outcome::Cancelled,
            notice: None,
        }
    }
}
