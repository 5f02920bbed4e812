//! Room view - the screen a room member lands on.

use crate::domain::dialog::{Button, DialogError, Navigation, RoomSession, Screen};

pub const ROOM_BACK_BUTTON_ID: &str = "back_button";

/// Handlers of the room view.
#[derive(Debug, Default)]
pub struct RoomViewDialog;

impl RoomViewDialog {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, session: &RoomSession) -> Result<Screen, DialogError> {
        let room = session.snapshot()?;
        Ok(Screen::new(format!("Room: {}", room.name))
            .with_row([Button::new(ROOM_BACK_BUTTON_ID, "Back")]))
    }

    pub fn on_click(&self, button: &str) -> Result<Navigation, DialogError> {
        match button {
            ROOM_BACK_BUTTON_ID => Ok(Navigation::Done),
            other => Err(DialogError::unknown_button(other)),
        }
    }
}
