//! Prompt sub-interaction - collects one line (or block) of text.
//!
//! The prompt stays open until it gets acceptable text or the user cancels.
//! Rejected input only re-prompts; it is never reported as cancellation.

use super::filters::ValidationPredicate;
use super::outcome::Outcome;
use super::screen::{Button, Screen};

/// Button id that abandons the prompt.
pub const CANCEL_BUTTON_ID: &str = "cancel_button";

/// What to ask for and how to check the answer.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    /// Human readable name of the requested value, e.g. "a new name".
    pub label: String,
    pub filter: Option<ValidationPredicate>,
}

impl PromptSpec {
    /// A prompt accepting any non-blank text.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: ValidationPredicate) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Whether `text` would be accepted.
    pub fn accepts(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.filter.map_or(true, |filter| filter(text))
    }
}

/// Reply to a submitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    /// The prompt is finished with this value.
    Accepted(String),
    /// The prompt stays open and asks again.
    Rejected,
}

/// An open prompt.
#[derive(Debug, Clone)]
pub struct Prompt {
    spec: PromptSpec,
    rejections: u32,
}

impl Prompt {
    pub fn start(spec: PromptSpec) -> Self {
        Self {
            spec,
            rejections: 0,
        }
    }

    pub fn spec(&self) -> &PromptSpec {
        &self.spec
    }

    /// Number of submissions rejected so far.
    pub fn rejections(&self) -> u32 {
        self.rejections
    }

    pub fn render(&self) -> Screen {
        let text = if self.rejections == 0 {
            format!("Please, enter {}", self.spec.label)
        } else {
            format!("Invalid input. Please, enter {}", self.spec.label)
        };
        Screen::new(text).with_row([Button::new(CANCEL_BUTTON_ID, "Cancel")])
    }

    pub fn submit(&mut self, text: &str) -> PromptStep {
        if self.spec.accepts(text) {
            PromptStep::Accepted(text.to_string())
        } else {
            self.rejections += 1;
            PromptStep::Rejected
        }
    }

    pub fn cancel(self) -> Outcome<String> {
        Outcome::Cancelled
    }
}
