//! DialogNavigator - hosts one conversation's stack of screens.
//!
//! The top frame receives every event. Prompts and confirmations are pushed
//! above the screen that started them; when they finish they are popped and
//! their result goes to that screen together with the intent it recorded.

use std::sync::Arc;

use crate::domain::dialog::buttons::{CANCEL_BUTTON_ID, NO_BUTTON_ID, YES_BUTTON_ID};
use crate::domain::dialog::{
    Confirmation, DialogError, Intent, InteractionResult, Navigation, Prompt, PromptStep,
    RoomSession, Screen, TaskSession, WelcomeSession,
};
use crate::domain::foundation::{RoomId, TaskId, UserId};
use crate::ports::TaskApi;

use super::handlers::{
    InvitationsDialog, RoomViewDialog, RoomlessDialog, StartMessageCommand, StartMessageHandler,
    StartRoute, TaskViewDialog,
};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    /// The start command.
    Start,
    /// A keyboard button was pressed.
    Click(String),
    /// A text message was sent.
    Text(String),
    /// A link to a task was followed.
    OpenTask(TaskId),
}

/// Which screen is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Welcome,
    Room(RoomId),
    Task(TaskId),
    Invitations,
    Prompt,
    Confirmation,
}

/// What to send back after an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigatorOutput {
    /// One-off notices, sent before the screen.
    pub notices: Vec<String>,
    /// The screen to show, or `None` when nothing changed.
    pub screen: Option<Screen>,
}

#[derive(Debug)]
enum Frame {
    Welcome(WelcomeSession),
    Room(RoomSession),
    Task(TaskSession),
    Invitations,
    Prompt(Prompt),
    Confirmation(Confirmation),
}

impl Frame {
    fn kind(&self) -> FrameKind {
        match self {
            Frame::Welcome(_) => FrameKind::Welcome,
            Frame::Room(session) => FrameKind::Room(session.entity_id()),
            Frame::Task(session) => FrameKind::Task(session.entity_id()),
            Frame::Invitations => FrameKind::Invitations,
            Frame::Prompt(_) => FrameKind::Prompt,
            Frame::Confirmation(_) => FrameKind::Confirmation,
        }
    }

    fn is_sub_interaction(&self) -> bool {
        matches!(
            self,
            Frame::Prompt(_) | Frame::Confirmation(_) | Frame::Invitations
        )
    }

    /// Records the intent of a sub-interaction this frame is starting.
    fn begin(&mut self, intent: Intent) -> Result<(), DialogError> {
        match self {
            Frame::Welcome(session) => session.begin(intent),
            Frame::Room(session) => session.begin(intent),
            Frame::Task(session) => session.begin(intent),
            other => Err(DialogError::invalid_state(format!(
                "{:?} cannot start a sub-interaction",
                other.kind()
            ))),
        }
    }

    fn take_pending(&mut self) -> Option<Intent> {
        match self {
            Frame::Welcome(session) => session.take_pending(),
            Frame::Room(session) => session.take_pending(),
            Frame::Task(session) => session.take_pending(),
            _ => None,
        }
    }
}

/// Screen stack of a single conversation.
pub struct DialogNavigator {
    user_id: UserId,
    stack: Vec<Frame>,
    start: StartMessageHandler,
    roomless: RoomlessDialog,
    room_view: RoomViewDialog,
    task_view: TaskViewDialog,
    invitations: InvitationsDialog,
}

impl DialogNavigator {
    pub fn new(api: Arc<dyn TaskApi>, user_id: UserId) -> Self {
        Self {
            user_id,
            stack: Vec::new(),
            start: StartMessageHandler::new(api.clone()),
            roomless: RoomlessDialog::new(api.clone()),
            room_view: RoomViewDialog::new(),
            task_view: TaskViewDialog::new(api),
            invitations: InvitationsDialog::new(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current(&self) -> Option<FrameKind> {
        self.stack.last().map(Frame::kind)
    }

    /// Kinds of all open frames, bottom first.
    pub fn frames(&self) -> Vec<FrameKind> {
        self.stack.iter().map(Frame::kind).collect()
    }

    /// The top-most task view session, if one is open.
    pub fn task_session(&self) -> Option<&TaskSession> {
        self.stack.iter().rev().find_map(|frame| match frame {
            Frame::Task(session) => Some(session),
            _ => None,
        })
    }

    /// Renders the top frame.
    pub fn render(&self) -> Result<Option<Screen>, DialogError> {
        let Some(frame) = self.stack.last() else {
            return Ok(None);
        };
        let screen = match frame {
            Frame::Welcome(_) => self.roomless.render(),
            Frame::Room(session) => self.room_view.render(session)?,
            Frame::Task(session) => self.task_view.render(session)?,
            Frame::Invitations => self.invitations.render(),
            Frame::Prompt(prompt) => prompt.render(),
            Frame::Confirmation(confirmation) => confirmation.render(),
        };
        Ok(Some(screen))
    }

    /// Processes one event to completion.
    ///
    /// On error the stack is left as it was at the failing step; the caller
    /// reports the error and the user may retry.
    pub async fn handle(&mut self, event: UserEvent) -> Result<NavigatorOutput, DialogError> {
        tracing::debug!(user_id = %self.user_id, ?event, top = ?self.current(), "handling event");
        let mut output = NavigatorOutput::default();

        let show = match event {
            UserEvent::Start => {
                let route = self
                    .start
                    .handle(StartMessageCommand {
                        user_id: self.user_id,
                    })
                    .await?;
                self.stack.clear();
                match route {
                    StartRoute::Room(room) => self
                        .stack
                        .push(Frame::Room(RoomSession::room(self.user_id, room))),
                    StartRoute::Welcome => self
                        .stack
                        .push(Frame::Welcome(WelcomeSession::welcome(self.user_id))),
                }
                true
            }
            UserEvent::OpenTask(task_id) => {
                self.apply(Navigation::OpenTask { task_id }, false).await?
            }
            UserEvent::Text(text) => self.on_text(&text).await?,
            UserEvent::Click(button) => self.on_click(&button, &mut output).await?,
        };

        if show {
            output.screen = self.render()?;
        }
        Ok(output)
    }

    async fn on_text(&mut self, text: &str) -> Result<bool, DialogError> {
        let step = match self.stack.last_mut() {
            Some(Frame::Prompt(prompt)) => prompt.submit(text),
            _ => {
                tracing::debug!(user_id = %self.user_id, "text outside a prompt ignored");
                return Ok(false);
            }
        };

        match step {
            PromptStep::Accepted(value) => self.finish_sub(InteractionResult::Text(value)).await,
            PromptStep::Rejected => Ok(true),
        }
    }

    async fn on_click(
        &mut self,
        button: &str,
        output: &mut NavigatorOutput,
    ) -> Result<bool, DialogError> {
        let nav = match self.current() {
            None => return Err(DialogError::invalid_state("no open dialog")),
            Some(FrameKind::Prompt) => {
                if button != CANCEL_BUTTON_ID {
                    return Err(DialogError::unknown_button(button));
                }
                if let Some(Frame::Prompt(prompt)) = self.stack.pop() {
                    let result: InteractionResult = prompt.cancel().into();
                    return self.deliver_after_pop(result).await;
                }
                return Err(DialogError::invalid_state("prompt vanished"));
            }
            Some(FrameKind::Confirmation) => {
                let answer = match button {
                    YES_BUTTON_ID => Some(true),
                    NO_BUTTON_ID => Some(false),
                    CANCEL_BUTTON_ID => None,
                    other => return Err(DialogError::unknown_button(other)),
                };
                if let Some(Frame::Confirmation(confirmation)) = self.stack.pop() {
                    let reply = match answer {
                        Some(yes) => confirmation.answer(yes),
                        None => confirmation.cancel(),
                    };
                    output.notices.extend(reply.notice);
                    return self.deliver_after_pop(reply.outcome.into()).await;
                }
                return Err(DialogError::invalid_state("confirmation vanished"));
            }
            Some(FrameKind::Welcome) => self.roomless.on_click(button)?,
            Some(FrameKind::Room(_)) => self.room_view.on_click(button)?,
            Some(FrameKind::Task(_)) => self.task_view.on_click(button)?,
            Some(FrameKind::Invitations) => self.invitations.on_click(button)?,
        };
        self.apply(nav, false).await
    }

    /// Pops the finished sub-interaction and delivers its result.
    async fn finish_sub(&mut self, result: InteractionResult) -> Result<bool, DialogError> {
        self.stack.pop();
        self.deliver_after_pop(result).await
    }

    async fn deliver_after_pop(&mut self, result: InteractionResult) -> Result<bool, DialogError> {
        let nav = self.deliver(result).await?;
        // The sub-interaction's message is gone, so the parent is shown again.
        self.apply(nav, true).await
    }

    /// Hands a result to the top frame along with the intent it recorded.
    async fn deliver(&mut self, result: InteractionResult) -> Result<Navigation, DialogError> {
        let Some(frame) = self.stack.last_mut() else {
            return Ok(Navigation::Unchanged);
        };
        let intent = frame.take_pending();
        tracing::debug!(user_id = %self.user_id, ?intent, ?result, "delivering result");

        match frame {
            Frame::Welcome(session) => {
                self.roomless
                    .on_process_result(session, intent, result)
                    .await
            }
            Frame::Task(session) => {
                self.task_view
                    .on_process_result(session, intent, result)
                    .await
            }
            _ => Ok(Navigation::Unchanged),
        }
    }

    /// Carries out navigation requests until the stack settles.
    ///
    /// Returns whether the top frame should be shown.
    async fn apply(&mut self, nav: Navigation, mut show: bool) -> Result<bool, DialogError> {
        let mut next = Some(nav);

        while let Some(nav) = next.take() {
            match nav {
                Navigation::Unchanged => {}
                Navigation::Redisplay => show = true,
                Navigation::Prompt { intent, spec } => {
                    self.top_mut()?.begin(intent)?;
                    self.stack.push(Frame::Prompt(Prompt::start(spec)));
                    show = true;
                }
                Navigation::Confirm { intent, spec } => {
                    self.top_mut()?.begin(intent)?;
                    self.stack
                        .push(Frame::Confirmation(Confirmation::start(spec)));
                    show = true;
                }
                Navigation::OpenInvitations { intent } => {
                    self.top_mut()?.begin(intent)?;
                    self.stack.push(Frame::Invitations);
                    show = true;
                }
                Navigation::OpenRoom { room, reset_stack } => {
                    if reset_stack {
                        self.stack.clear();
                    }
                    self.stack
                        .push(Frame::Room(RoomSession::room(self.user_id, room)));
                    show = true;
                }
                Navigation::OpenTask { task_id } => {
                    let session = self.task_view.start(self.user_id, task_id).await?;
                    self.abandon_sub_interactions();
                    self.stack.push(Frame::Task(session));
                    show = true;
                }
                Navigation::Done => {
                    let closed = self.stack.pop();
                    if self.stack.is_empty() {
                        tracing::debug!(user_id = %self.user_id, "dialog stack closed");
                        return Ok(false);
                    }
                    if closed.as_ref().is_some_and(Frame::is_sub_interaction) {
                        next = Some(self.deliver(InteractionResult::Cancelled).await?);
                    }
                    show = true;
                }
            }
        }

        Ok(show)
    }

    /// Drops open prompts and confirmations without delivering a result.
    fn abandon_sub_interactions(&mut self) {
        let mut abandoned = 0;
        while self.stack.last().is_some_and(Frame::is_sub_interaction) {
            self.stack.pop();
            abandoned += 1;
        }
        if abandoned > 0 {
            let intent = self.stack.last_mut().and_then(Frame::take_pending);
            tracing::debug!(user_id = %self.user_id, abandoned, ?intent, "sub-interactions abandoned");
        }
    }

    fn top_mut(&mut self) -> Result<&mut Frame, DialogError> {
        self.stack
            .last_mut()
            .ok_or_else(|| DialogError::invalid_state("no open dialog"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::InMemoryTaskApi;
    use crate::application::handlers::{CREATE_ROOM_BUTTON_ID, INVITATIONS_BUTTON_ID};

    const USER: UserId = UserId::new(1);

    fn navigator(api: &InMemoryTaskApi) -> DialogNavigator {
        DialogNavigator::new(Arc::new(api.clone()), USER)
    }

    fn click(id: &str) -> UserEvent {
        UserEvent::Click(id.to_string())
    }

    #[tokio::test]
    async fn start_opens_welcome() {
        let api = InMemoryTaskApi::new();
        let mut nav = navigator(&api);

        let output = nav.handle(UserEvent::Start).await.unwrap();

        assert_eq!(nav.frames(), vec![FrameKind::Welcome]);
        assert!(output.screen.unwrap().has_button(CREATE_ROOM_BUTTON_ID));
    }

    #[tokio::test]
    async fn click_without_dialog_is_invalid_state() {
        let mut nav = navigator(&InMemoryTaskApi::new());
        let result = nav.handle(click("anything")).await;
        assert!(matches!(result, Err(DialogError::InvalidState(_))));
    }

    #[tokio::test]
    async fn text_outside_prompt_changes_nothing() {
        let mut nav = navigator(&InMemoryTaskApi::new());
        nav.handle(UserEvent::Start).await.unwrap();

        let output = nav.handle(UserEvent::Text("hello".to_string())).await.unwrap();

        assert_eq!(output, NavigatorOutput::default());
        assert_eq!(nav.frames(), vec![FrameKind::Welcome]);
    }

    #[tokio::test]
    async fn prompt_records_intent_on_parent() {
        let mut nav = navigator(&InMemoryTaskApi::new());
        nav.handle(UserEvent::Start).await.unwrap();
        nav.handle(click(CREATE_ROOM_BUTTON_ID)).await.unwrap();

        assert_eq!(nav.frames(), vec![FrameKind::Welcome, FrameKind::Prompt]);
        match &nav.stack[0] {
            Frame::Welcome(session) => {
                assert_eq!(session.pending().pending_intent(), Some(Intent::CreateRoom))
            }
            other => panic!("unexpected frame {:?}", other),
        }
    }

    #[tokio::test]
    async fn prompt_rejects_unknown_buttons() {
        let mut nav = navigator(&InMemoryTaskApi::new());
        nav.handle(UserEvent::Start).await.unwrap();
        nav.handle(click(CREATE_ROOM_BUTTON_ID)).await.unwrap();

        let result = nav.handle(click(YES_BUTTON_ID)).await;

        assert!(matches!(result, Err(DialogError::UnknownButton(_))));
        assert_eq!(nav.current(), Some(FrameKind::Prompt));
    }

    #[tokio::test]
    async fn closing_invitations_returns_to_welcome() {
        let api = InMemoryTaskApi::new();
        let mut nav = navigator(&api);
        nav.handle(UserEvent::Start).await.unwrap();
        nav.handle(click(INVITATIONS_BUTTON_ID)).await.unwrap();
        assert_eq!(nav.current(), Some(FrameKind::Invitations));

        let output = nav.handle(click("back_button")).await.unwrap();

        assert_eq!(nav.frames(), vec![FrameKind::Welcome]);
        assert!(output.screen.unwrap().has_button(INVITATIONS_BUTTON_ID));
        match &nav.stack[0] {
            Frame::Welcome(session) => assert_eq!(session.pending().pending_intent(), None),
            other => panic!("unexpected frame {:?}", other),
        }
    }

    #[tokio::test]
    async fn opening_task_abandons_open_prompt() {
        let api = InMemoryTaskApi::new();
        api.seed_task(crate::domain::task::TaskInfo {
            id: TaskId::new(7),
            name: "Dishes".to_string(),
            description: String::new(),
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
            period: 2,
            order_id: None,
        })
        .await;
        let mut nav = navigator(&api);
        nav.handle(UserEvent::Start).await.unwrap();
        nav.handle(click(CREATE_ROOM_BUTTON_ID)).await.unwrap();

        nav.handle(UserEvent::OpenTask(TaskId::new(7))).await.unwrap();
        assert_eq!(
            nav.frames(),
            vec![FrameKind::Welcome, FrameKind::Task(TaskId::new(7))]
        );

        let output = nav.handle(click("back_button")).await.unwrap();
        assert_eq!(nav.frames(), vec![FrameKind::Welcome]);
        assert!(output.screen.unwrap().has_button(CREATE_ROOM_BUTTON_ID));
        match &nav.stack[0] {
            Frame::Welcome(session) => assert_eq!(session.pending().pending_intent(), None),
            other => panic!("unexpected frame {:?}", other),
        }
    }

    #[tokio::test]
    async fn failed_task_open_keeps_open_prompt() {
        let mut nav = navigator(&InMemoryTaskApi::new());
        nav.handle(UserEvent::Start).await.unwrap();
        nav.handle(click(CREATE_ROOM_BUTTON_ID)).await.unwrap();

        let result = nav.handle(UserEvent::OpenTask(TaskId::new(7))).await;

        assert!(matches!(result, Err(DialogError::Remote(_))));
        assert_eq!(nav.frames(), vec![FrameKind::Welcome, FrameKind::Prompt]);
    }

    #[tokio::test]
    async fn closing_last_frame_empties_stack() {
        let api = InMemoryTaskApi::new();
        api.seed_room(
            crate::domain::room::RoomInfo::new(RoomId::new(2), "Flat"),
            USER,
        )
        .await;
        let mut nav = navigator(&api);
        nav.handle(UserEvent::Start).await.unwrap();
        assert_eq!(nav.current(), Some(FrameKind::Room(RoomId::new(2))));

        let output = nav.handle(click("back_button")).await.unwrap();

        assert_eq!(nav.depth(), 0);
        assert_eq!(output.screen, None);
    }
}
