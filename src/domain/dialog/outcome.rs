//! Results reported by sub-interactions to their parent screen.

/// Result of a single sub-interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The user completed the sub-interaction.
    Value(T),
    /// The user backed out.
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

impl From<Outcome<String>> for InteractionResult {
    fn from(outcome: Outcome<String>) -> Self {
        match outcome {
            Outcome::Value(text) => InteractionResult::Text(text),
            Outcome::Cancelled => InteractionResult::Cancelled,
        }
    }
}

impl From<Outcome<bool>> for InteractionResult {
    fn from(outcome: Outcome<bool>) -> Self {
        match outcome {
            Outcome::Value(decision) => InteractionResult::Decision(decision),
            Outcome::Cancelled => InteractionResult::Cancelled,
        }
    }
}

/// Result value delivered to a parent screen, whatever sub-interaction produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionResult {
    Text(String),
    Decision(bool),
    Cancelled,
}

impl InteractionResult {
    /// Text if the result carries some.
    pub fn text(&self) -> Option<&str> {
        match self {
            InteractionResult::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Only an explicit "yes" counts as affirmative.
    pub fn is_affirmative(&self) -> bool {
        matches!(self, InteractionResult::Decision(true))
    }
}
