//! Session context - per-screen state of one conversation.
//!
//! A context is created when its screen starts and dropped when the screen
//! ends. It is owned by exactly one conversation and never shared.

use crate::domain::foundation::{RoomId, SessionId, StateMachine, TaskId, UserId};
use crate::domain::room::RoomInfo;
use crate::domain::task::TaskSnapshot;

use super::dispatch::DispatchState;
use super::errors::DialogError;
use super::intent::Intent;

/// Scoped state of a screen bound to one entity.
#[derive(Debug, Clone)]
pub struct SessionContext<Id, Snapshot> {
    session_id: SessionId,
    user_id: UserId,
    entity_id: Id,
    snapshot: Option<Snapshot>,
    pending: DispatchState,
}

/// Task view state.
pub type TaskSession = SessionContext<TaskId, TaskSnapshot>;

/// Room view state.
pub type RoomSession = SessionContext<RoomId, RoomInfo>;

/// Welcome screen state. Bound to the user; it has nothing to fetch.
pub type WelcomeSession = SessionContext<UserId, ()>;

impl<Id: Copy, Snapshot> SessionContext<Id, Snapshot> {
    /// Creates a context with no snapshot yet.
    pub fn new(user_id: UserId, entity_id: Id) -> Self {
        Self {
            session_id: SessionId::new(),
            user_id,
            entity_id,
            snapshot: None,
            pending: DispatchState::Idle,
        }
    }

    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn entity_id(&self) -> Id {
        self.entity_id
    }

    /// The last refreshed snapshot.
    pub fn snapshot(&self) -> Result<&Snapshot, DialogError> {
        self.snapshot.as_ref().ok_or(DialogError::SnapshotNotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Replaces the snapshot wholesale.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn pending(&self) -> DispatchState {
        self.pending
    }

    /// Records the intent of a sub-interaction this screen is starting.
    pub fn begin(&mut self, intent: Intent) -> Result<(), DialogError> {
        self.pending = self
            .pending
            .transition_to(DispatchState::AwaitingResult(intent))
            .map_err(|e| DialogError::invalid_state(e.to_string()))?;
        Ok(())
    }

    /// Clears and returns the pending intent. `None` if nothing was pending.
    pub fn take_pending(&mut self) -> Option<Intent> {
        let intent = self.pending.pending_intent();
        self.pending = DispatchState::Idle;
        intent
    }
}

impl WelcomeSession {
    pub fn welcome(user_id: UserId) -> Self {
        Self::new(user_id, user_id).with_snapshot(())
    }
}

impl RoomSession {
    pub fn room(user_id: UserId, room: RoomInfo) -> Self {
        Self::new(user_id, room.id).with_snapshot(room)
    }
}
