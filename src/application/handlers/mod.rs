//! Application handlers.
//!
//! One handler per screen. Handlers render their screen, turn clicks into
//! [`Navigation`](crate::domain::dialog::Navigation) requests, and apply
//! sub-interaction results through the dispatcher.

mod invitations;
mod room_view;
mod roomless;
mod start_message;
mod task_view;

pub use invitations::{InvitationsDialog, INVITATIONS_BACK_BUTTON_ID, NO_INVITATIONS_MESSAGE};
pub use room_view::{RoomViewDialog, ROOM_BACK_BUTTON_ID};
pub use roomless::{RoomlessDialog, CREATE_ROOM_BUTTON_ID, INVITATIONS_BUTTON_ID, WELCOME_MESSAGE};
pub use start_message::{StartMessageCommand, StartMessageHandler, StartRoute};
pub use task_view::{
    TaskViewDialog, BACK_BUTTON_ID, DELETE_BUTTON_ID, EDIT_DESCRIPTION_BUTTON_ID,
    EDIT_NAME_BUTTON_ID, EDIT_ORDER_BUTTON_ID, EDIT_PERIOD_BUTTON_ID, EDIT_START_DATE_BUTTON_ID,
};
