//! Rendered screens: message text plus an inline keyboard.

/// A keyboard button. `id` is what a click reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub id: &'static str,
    pub label: &'static str,
}

impl Button {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// What the user sees for the current frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    pub text: String,
    pub keyboard: Vec<Vec<Button>>,
}

impl Screen {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Vec::new(),
        }
    }

    /// Appends a keyboard row.
    pub fn with_row(mut self, row: impl IntoIterator<Item = Button>) -> Self {
        self.keyboard.push(row.into_iter().collect());
        self
    }

    /// Returns true if a button with this id is on the keyboard.
    pub fn has_button(&self, id: &str) -> bool {
        self.buttons().any(|b| b.id == id)
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.keyboard.iter().flatten()
    }
}
