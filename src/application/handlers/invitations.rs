//! Incoming invitations list.
//!
//! Invitations are not served by the task API yet, so the list is always
//! empty and the screen can only be closed.

use crate::domain::dialog::{Button, DialogError, Navigation, Screen};

pub const INVITATIONS_BACK_BUTTON_ID: &str = "back_button";
pub const NO_INVITATIONS_MESSAGE: &str = "You have no incoming invitations";

#[derive(Debug, Default)]
pub struct InvitationsDialog;

impl InvitationsDialog {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self) -> Screen {
        Screen::new(NO_INVITATIONS_MESSAGE)
            .with_row([Button::new(INVITATIONS_BACK_BUTTON_ID, "Back")])
    }

    pub fn on_click(&self, button: &str) -> Result<Navigation, DialogError> {
        match button {
            INVITATIONS_BACK_BUTTON_ID => Ok(Navigation::Done),
            other => Err(DialogError::unknown_button(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_is_the_only_button() {
        let dialog = InvitationsDialog::new();
        let screen = dialog.render();
        assert_eq!(screen.buttons().count(), 1);
        assert!(matches!(
            dialog.on_click(INVITATIONS_BACK_BUTTON_ID),
            Ok(Navigation::Done)
        ));
        assert!(dialog.on_click("create_room_button").is_err());
    }
}
