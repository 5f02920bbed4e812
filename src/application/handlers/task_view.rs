//! Task view - shows one task and lets the user edit or delete it.
//!
//! The view keeps a [`TaskSession`] holding the task id and the last fetched
//! snapshot. Edits are prompted, sent to the task API, and followed by a full
//! refresh so the screen never shows a value older than the last write.

use std::sync::Arc;

use crate::domain::dialog::filters::{
    description_filter, name_filter, period_filter, start_date_filter,
};
use crate::domain::dialog::{
    plan, Button, ConfirmationSpec, DialogError, DispatchScope, Intent, InteractionResult,
    Navigation, Plan, PromptSpec, Screen, TaskSession,
};
use crate::domain::foundation::{TaskId, UserId};
use crate::domain::task::TaskSnapshot;
use crate::ports::TaskApi;

pub const BACK_BUTTON_ID: &str = "back_button";
pub const EDIT_NAME_BUTTON_ID: &str = "edit_name_button";
pub const EDIT_DESCRIPTION_BUTTON_ID: &str = "edit_description_button";
pub const EDIT_START_DATE_BUTTON_ID: &str = "edit_start_date_button";
pub const EDIT_PERIOD_BUTTON_ID: &str = "edit_period_button";
pub const EDIT_ORDER_BUTTON_ID: &str = "edit_order_button";
pub const DELETE_BUTTON_ID: &str = "delete_button";

/// Handlers of the task view.
pub struct TaskViewDialog {
    api: Arc<dyn TaskApi>,
}

impl TaskViewDialog {
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self { api }
    }

    /// Opens a session for the task and loads it.
    pub async fn start(&self, user: UserId, task_id: TaskId) -> Result<TaskSession, DialogError> {
        let mut session = TaskSession::new(user, task_id);
        self.refresh(&mut session).await?;
        Ok(session)
    }

    /// Re-fetches the task and its executor order.
    ///
    /// On failure the previous snapshot is kept.
    pub async fn refresh(&self, session: &mut TaskSession) -> Result<(), DialogError> {
        let user = session.user_id();
        let task = self.api.get_task_info(session.entity_id(), user).await?;

        let executors = match task.order_id {
            Some(order_id) => Some(self.api.get_order_info(order_id, user).await?.users),
            None => None,
        };

        session.replace_snapshot(TaskSnapshot::new(task, executors));
        Ok(())
    }

    pub fn render(&self, session: &TaskSession) -> Result<Screen, DialogError> {
        let snapshot = session.snapshot()?;
        Ok(Screen::new(snapshot.render_text())
            .with_row([
                Button::new(EDIT_NAME_BUTTON_ID, "Edit name"),
                Button::new(EDIT_DESCRIPTION_BUTTON_ID, "Edit description"),
            ])
            .with_row([
                Button::new(EDIT_START_DATE_BUTTON_ID, "Edit start date"),
                Button::new(EDIT_PERIOD_BUTTON_ID, "Edit period"),
            ])
            .with_row([
                Button::new(DELETE_BUTTON_ID, "Delete"),
                Button::new(EDIT_ORDER_BUTTON_ID, "Edit order"),
            ])
            .with_row([Button::new(BACK_BUTTON_ID, "Back")]))
    }

    pub fn on_click(&self, button: &str) -> Result<Navigation, DialogError> {
        let nav = match button {
            EDIT_NAME_BUTTON_ID => prompt(
                Intent::EditName,
                PromptSpec::new("a new name").with_filter(name_filter),
            ),
            EDIT_DESCRIPTION_BUTTON_ID => prompt(
                Intent::EditDescription,
                PromptSpec::new("a new description").with_filter(description_filter),
            ),
            EDIT_START_DATE_BUTTON_ID => prompt(
                Intent::EditStartDate,
                PromptSpec::new("a new start date").with_filter(start_date_filter),
            ),
            EDIT_PERIOD_BUTTON_ID => prompt(
                Intent::EditPeriod,
                PromptSpec::new("a new period").with_filter(period_filter),
            ),
            DELETE_BUTTON_ID => Navigation::Confirm {
                intent: Intent::Delete,
                spec: ConfirmationSpec::new("delete the task", "The task has been deleted"),
            },
            // TODO: open the executor order editor once the API exposes order updates.
            EDIT_ORDER_BUTTON_ID => Navigation::Unchanged,
            BACK_BUTTON_ID => Navigation::Done,
            other => return Err(DialogError::unknown_button(other)),
        };
        Ok(nav)
    }

    /// Applies a sub-interaction result delivered to the task view.
    pub async fn on_process_result(
        &self,
        session: &mut TaskSession,
        intent: Option<Intent>,
        result: InteractionResult,
    ) -> Result<Navigation, DialogError> {
        let user = session.user_id();
        let task_id = session.entity_id();

        match plan(intent, &result, DispatchScope::Task(task_id))? {
            Plan::DeleteTask { task_id } => {
                self.api.delete_task(task_id, user).await?;
                tracing::info!(user_id = %user, task_id = %task_id, "task deleted");
                Ok(Navigation::Done)
            }
            Plan::ModifyTask(patch) => {
                self.api.modify_task(&patch, user).await?;
                tracing::info!(user_id = %user, task_id = %task_id, ?intent, "task modified");
                self.refresh(session).await?;
                Ok(Navigation::Redisplay)
            }
            Plan::Redisplay => Ok(Navigation::Redisplay),
            // Room creation is never planned for the task scope.
            Plan::Ignore | Plan::CreateRoom { .. } => {
                tracing::debug!(session_id = %session.session_id(), ?intent, "result ignored");
                Ok(Navigation::Unchanged)
            }
        }
    }
}

fn prompt(intent: Intent, spec: PromptSpec) -> Navigation {
    Navigation::Prompt { intent, spec }
}
