//! Dialog domain module.
//!
//! The prompt-and-dispatch protocol: a screen records an [`Intent`], starts a
//! [`Prompt`] or [`Confirmation`], and when the sub-interaction reports back
//! the dispatcher's [`plan`] decides which mutation to apply.

mod confirmation;
mod dispatch;
mod errors;
pub mod filters;
mod intent;
mod navigation;
mod outcome;
mod prompt;
mod screen;
mod session;

pub use confirmation::{Confirmation, ConfirmationReply, ConfirmationSpec};
pub use dispatch::{plan, DispatchScope, DispatchState, Plan};
pub use errors::DialogError;
pub use filters::ValidationPredicate;
pub use intent::{Intent, UnknownIntent};
pub use navigation::Navigation;
pub use outcome::{InteractionResult, Outcome};
pub use prompt::{Prompt, PromptSpec, PromptStep};
pub use screen::{Button, Screen};
pub use session::{RoomSession, SessionContext, TaskSession, WelcomeSession};

/// Button ids shared by the prompt and confirmation screens.
pub mod buttons {
    pub use super::confirmation::{NO_BUTTON_ID, YES_BUTTON_ID};
    pub use super::prompt::CANCEL_BUTTON_ID;
}
