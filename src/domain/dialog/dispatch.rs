//! Result dispatcher - routes a finished sub-interaction to its mutation.
//!
//! `plan` is pure: it maps the recorded intent, the result value and the
//! screen's scope to the mutation to perform. Executing the plan against the
//! task API is left to the application handlers.

use crate::domain::foundation::{StateMachine, TaskId, ValidationError};
use crate::domain::task::TaskPatch;

use super::filters::{parse_period, parse_start_date};
use super::intent::Intent;
use super::outcome::InteractionResult;

/// Whether a screen is waiting on a sub-interaction it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    Idle,
    AwaitingResult(Intent),
}

impl DispatchState {
    /// The intent recorded for the pending sub-interaction, if any.
    pub fn pending_intent(&self) -> Option<Intent> {
        match self {
            DispatchState::Idle => None,
            DispatchState::AwaitingResult(intent) => Some(*intent),
        }
    }
}

impl StateMachine for DispatchState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DispatchState::*;
        matches!(
            (self, target),
            (Idle, AwaitingResult(_)) | (AwaitingResult(_), Idle)
        )
    }
}

/// The screen a result is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchScope {
    /// Welcome screen of a user without a room.
    Welcome,
    /// Task view of the given task.
    Task(TaskId),
}

/// What to do with a delivered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    CreateRoom { name: String },
    DeleteTask { task_id: TaskId },
    ModifyTask(TaskPatch),
    /// Known intent, but the user declined or cancelled.
    Redisplay,
    /// No intent recorded, or the intent means nothing on this screen.
    Ignore,
}

/// Maps a result to the mutation its intent calls for.
///
/// Fails only if prompted text does not parse, which the prompt filters
/// already rule out.
pub fn plan(
    intent: Option<Intent>,
    result: &InteractionResult,
    scope: DispatchScope,
) -> Result<Plan, ValidationError> {
    let Some(intent) = intent else {
        return Ok(Plan::Ignore);
    };

    let plan = match (scope, intent) {
        (DispatchScope::Welcome, Intent::CreateRoom) => match result.text() {
            Some(name) => Plan::CreateRoom {
                name: name.to_string(),
            },
            None => Plan::Redisplay,
        },

        (DispatchScope::Task(task_id), Intent::Delete) => {
            if result.is_affirmative() {
                Plan::DeleteTask { task_id }
            } else {
                Plan::Redisplay
            }
        }

        (DispatchScope::Task(task_id), Intent::EditName) => match result.text() {
            Some(name) => Plan::ModifyTask(TaskPatch::new(task_id).with_name(name)),
            None => Plan::Redisplay,
        },

        (DispatchScope::Task(task_id), Intent::EditDescription) => match result.text() {
            Some(description) => {
                Plan::ModifyTask(TaskPatch::new(task_id).with_description(description))
            }
            None => Plan::Redisplay,
        },

        (DispatchScope::Task(task_id), Intent::EditStartDate) => match result.text() {
            Some(text) => {
                Plan::ModifyTask(TaskPatch::new(task_id).with_start_date(parse_start_date(text)?))
            }
            None => Plan::Redisplay,
        },

        (DispatchScope::Task(task_id), Intent::EditPeriod) => match result.text() {
            Some(text) => Plan::ModifyTask(TaskPatch::new(task_id).with_period(parse_period(text)?)),
            None => Plan::Redisplay,
        },

        (DispatchScope::Welcome, Intent::Invitations)
        | (DispatchScope::Welcome, Intent::Delete)
        | (DispatchScope::Welcome, Intent::EditName)
        | (DispatchScope::Welcome, Intent::EditDescription)
        | (DispatchScope::Welcome, Intent::EditStartDate)
        | (DispatchScope::Welcome, Intent::EditPeriod)
        | (DispatchScope::Task(_), Intent::CreateRoom)
        | (DispatchScope::Task(_), Intent::Invitations) => Plan::Ignore,
    };

    Ok(plan)
}
