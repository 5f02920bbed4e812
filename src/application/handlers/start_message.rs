//! StartMessageHandler - registers the user and picks the first screen.

use std::sync::Arc;

use crate::domain::dialog::DialogError;
use crate::domain::foundation::UserId;
use crate::domain::room::RoomInfo;
use crate::ports::{TaskApi, UserRegistration};

/// Command sent when a user opens the bot.
#[derive(Debug, Clone, Copy)]
pub struct StartMessageCommand {
    pub user_id: UserId,
}

/// Screen the conversation starts on. Both replace the whole stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartRoute {
    /// The user belongs to a room.
    Room(RoomInfo),
    /// The user has no room (or it could not be fetched).
    Welcome,
}

/// Handler for the start message.
pub struct StartMessageHandler {
    api: Arc<dyn TaskApi>,
}

impl StartMessageHandler {
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: StartMessageCommand) -> Result<StartRoute, DialogError> {
        // 1. Register; an existing registration is fine
        match self.api.create_user(cmd.user_id).await? {
            UserRegistration::Created => {
                tracing::info!(user_id = %cmd.user_id, "registered new user");
            }
            UserRegistration::AlreadyExists => {
                tracing::debug!(user_id = %cmd.user_id, "user already registered");
            }
        }

        // 2. Route by room membership; a failed lookup counts as no room
        match self.api.get_room_info(cmd.user_id).await {
            Ok(Some(room)) => Ok(StartRoute::Room(room)),
            Ok(None) => Ok(StartRoute::Welcome),
            Err(e) => {
                tracing::warn!(user_id = %cmd.user_id, "room lookup failed, showing welcome: {}", e);
                Ok(StartRoute::Welcome)
            }
        }
    }
}
