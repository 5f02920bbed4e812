//! Welcome screen for users that are not in a room yet.

use std::sync::Arc;

use crate::domain::dialog::{
    plan, Button, DialogError, DispatchScope, Intent, InteractionResult, Navigation, Plan,
    PromptSpec, Screen, WelcomeSession,
};
use crate::domain::room::RoomInfo;
use crate::ports::TaskApi;

pub const WELCOME_MESSAGE: &str = "This is a welcome message\n
You can:
- Accept an invitation to a room
- Create a new room";

pub const INVITATIONS_BUTTON_ID: &str = "invitations_button";
pub const CREATE_ROOM_BUTTON_ID: &str = "create_room_button";

/// Handlers of the welcome screen.
pub struct RoomlessDialog {
    api: Arc<dyn TaskApi>,
}

impl RoomlessDialog {
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self { api }
    }

    pub fn render(&self) -> Screen {
        Screen::new(WELCOME_MESSAGE).with_row([
            Button::new(INVITATIONS_BUTTON_ID, "Invitations"),
            Button::new(CREATE_ROOM_BUTTON_ID, "Create"),
        ])
    }

    pub fn on_click(&self, button: &str) -> Result<Navigation, DialogError> {
        match button {
            INVITATIONS_BUTTON_ID => Ok(Navigation::OpenInvitations {
                intent: Intent::Invitations,
            }),
            CREATE_ROOM_BUTTON_ID => Ok(Navigation::Prompt {
                intent: Intent::CreateRoom,
                spec: PromptSpec::new("a room's name"),
            }),
            other => Err(DialogError::unknown_button(other)),
        }
    }

    /// Applies a sub-interaction result delivered to the welcome screen.
    pub async fn on_process_result(
        &self,
        session: &WelcomeSession,
        intent: Option<Intent>,
        result: InteractionResult,
    ) -> Result<Navigation, DialogError> {
        match plan(intent, &result, DispatchScope::Welcome)? {
            Plan::CreateRoom { name } => {
                let user = session.user_id();
                let room_id = self.api.create_room(&name, user).await?;
                tracing::info!(user_id = %user, room_id = %room_id, "room created");
                Ok(Navigation::OpenRoom {
                    room: RoomInfo::new(room_id, name),
                    reset_stack: true,
                })
            }
            Plan::Redisplay => Ok(Navigation::Redisplay),
            // Task plans are never produced for the welcome scope.
            Plan::Ignore | Plan::DeleteTask { .. } | Plan::ModifyTask(_) => {
                tracing::debug!(session_id = %session.session_id(), ?intent, "result ignored");
                Ok(Navigation::Unchanged)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::{ApiCall, ApiOperation, InMemoryTaskApi};
    use crate::domain::foundation::{RoomId, UserId};
    use crate::ports::ApiError;

    const USER: UserId = UserId::new(8);

    fn dialog(api: &InMemoryTaskApi) -> RoomlessDialog {
        RoomlessDialog::new(Arc::new(api.clone()))
    }

    #[test]
    fn renders_welcome_with_two_buttons() {
        let screen = dialog(&InMemoryTaskApi::new()).render();
        assert!(screen.text.contains("Create a new room"));
        assert!(screen.has_button(INVITATIONS_BUTTON_ID));
        assert!(screen.has_button(CREATE_ROOM_BUTTON_ID));
    }

    #[test]
    fn create_button_prompts_for_room_name() {
        let nav = dialog(&InMemoryTaskApi::new())
            .on_click(CREATE_ROOM_BUTTON_ID)
            .unwrap();
        match nav {
            Navigation::Prompt { intent, spec } => {
                assert_eq!(intent, Intent::CreateRoom);
                assert_eq!(spec.label, "a room's name");
                assert!(spec.filter.is_none());
            }
            other => panic!("expected prompt, got {:?}", other),
        }
    }

    #[test]
    fn invitations_button_opens_invitations() {
        let nav = dialog(&InMemoryTaskApi::new())
            .on_click(INVITATIONS_BUTTON_ID)
            .unwrap();
        assert_eq!(nav.intent(), Some(Intent::Invitations));
    }

    #[test]
    fn unknown_button_is_an_error() {
        let result = dialog(&InMemoryTaskApi::new()).on_click("delete_button");
        assert!(matches!(result, Err(DialogError::UnknownButton(_))));
    }

    #[tokio::test]
    async fn room_name_creates_room_and_resets_stack() {
        let api = InMemoryTaskApi::new();
        let session = WelcomeSession::welcome(USER);

        let nav = dialog(&api)
            .on_process_result(
                &session,
                Some(Intent::CreateRoom),
                InteractionResult::Text("Team Alpha".to_string()),
            )
            .await
            .unwrap();

        match nav {
            Navigation::OpenRoom { room, reset_stack } => {
                assert!(reset_stack);
                assert_eq!(room.name, "Team Alpha");
                assert_eq!(room.id, RoomId::new(1));
            }
            other => panic!("expected room, got {:?}", other),
        }
        assert_eq!(
            api.mutations().await,
            vec![ApiCall::CreateRoom {
                name: "Team Alpha".to_string(),
                user: USER
            }]
        );
    }

    #[tokio::test]
    async fn cancelled_prompt_redisplays_without_calls() {
        let api = InMemoryTaskApi::new();
        let nav = dialog(&api)
            .on_process_result(
                &WelcomeSession::welcome(USER),
                Some(Intent::CreateRoom),
                InteractionResult::Cancelled,
            )
            .await
            .unwrap();

        assert!(matches!(nav, Navigation::Redisplay));
        assert!(api.calls().await.is_empty());
    }

    #[tokio::test]
    async fn result_without_intent_is_ignored() {
        let api = InMemoryTaskApi::new();
        let nav = dialog(&api)
            .on_process_result(
                &WelcomeSession::welcome(USER),
                None,
                InteractionResult::Text("Team Alpha".to_string()),
            )
            .await
            .unwrap();

        assert!(matches!(nav, Navigation::Unchanged));
        assert!(api.calls().await.is_empty());
    }

    #[tokio::test]
    async fn create_room_failure_propagates() {
        let api = InMemoryTaskApi::new();
        api.fail_on(ApiOperation::CreateRoom, ApiError::unavailable("down"))
            .await;

        let result = dialog(&api)
            .on_process_result(
                &WelcomeSession::welcome(USER),
                Some(Intent::CreateRoom),
                InteractionResult::Text("Team Alpha".to_string()),
            )
            .await;

        assert!(matches!(result, Err(DialogError::Remote(_))));
    }
}
