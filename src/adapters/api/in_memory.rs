//! In-Memory Task API Adapter
//!
//! Keeps users, rooms, tasks and orders in memory. Used by tests and by the
//! console runner when no API URL is configured.
//!
//! Every call is recorded so tests can assert which mutations happened, and
//! failures can be injected per operation.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{OrderId, RoomId, TaskId, UserId};
use crate::domain::room::RoomInfo;
use crate::domain::task::{OrderInfo, TaskInfo, TaskPatch};
use crate::ports::{ApiError, TaskApi, UserRegistration};

/// Kind of task API call, used to target injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    CreateUser,
    GetRoomInfo,
    CreateRoom,
    GetTaskInfo,
    GetOrderInfo,
    ModifyTask,
    DeleteTask,
}

/// A recorded call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    CreateUser(UserId),
    GetRoomInfo(UserId),
    CreateRoom { name: String, user: UserId },
    GetTaskInfo { task: TaskId, user: UserId },
    GetOrderInfo { order: OrderId, user: UserId },
    ModifyTask { patch: TaskPatch, user: UserId },
    DeleteTask { task: TaskId, user: UserId },
}

impl ApiCall {
    pub fn operation(&self) -> ApiOperation {
        match self {
            ApiCall::CreateUser(_) => ApiOperation::CreateUser,
            ApiCall::GetRoomInfo(_) => ApiOperation::GetRoomInfo,
            ApiCall::CreateRoom { .. } => ApiOperation::CreateRoom,
            ApiCall::GetTaskInfo { .. } => ApiOperation::GetTaskInfo,
            ApiCall::GetOrderInfo { .. } => ApiOperation::GetOrderInfo,
            ApiCall::ModifyTask { .. } => ApiOperation::ModifyTask,
            ApiCall::DeleteTask { .. } => ApiOperation::DeleteTask,
        }
    }

    /// Returns true for calls that change remote state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self.operation(),
            ApiOperation::CreateUser
                | ApiOperation::CreateRoom
                | ApiOperation::ModifyTask
                | ApiOperation::DeleteTask
        )
    }
}

#[derive(Debug, Default)]
struct State {
    users: HashSet<UserId>,
    rooms: HashMap<RoomId, RoomInfo>,
    memberships: HashMap<UserId, RoomId>,
    tasks: HashMap<TaskId, TaskInfo>,
    orders: HashMap<OrderId, OrderInfo>,
    next_room_id: i64,
    failures: HashMap<ApiOperation, ApiError>,
    calls: Vec<ApiCall>,
}

impl State {
    /// Records the call and returns the injected failure for it, if any.
    fn record(&mut self, call: ApiCall) -> Result<(), ApiError> {
        let operation = call.operation();
        self.calls.push(call);
        match self.failures.get(&operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// In-memory implementation of the task API.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskApi {
    state: Arc<RwLock<State>>,
}

impl InMemoryTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user without recording a call.
    pub async fn seed_user(&self, user: UserId) {
        self.state.write().await.users.insert(user);
    }

    /// Adds a room and makes `member` part of it.
    pub async fn seed_room(&self, room: RoomInfo, member: UserId) {
        let mut state = self.state.write().await;
        state.next_room_id = state.next_room_id.max(room.id.get());
        state.memberships.insert(member, room.id);
        state.rooms.insert(room.id, room);
    }

    pub async fn seed_task(&self, task: TaskInfo) {
        self.state.write().await.tasks.insert(task.id, task);
    }

    pub async fn seed_order(&self, order_id: OrderId, order: OrderInfo) {
        self.state.write().await.orders.insert(order_id, order);
    }

    /// Makes every call of `operation` fail with `error` until cleared.
    pub async fn fail_on(&self, operation: ApiOperation, error: ApiError) {
        self.state.write().await.failures.insert(operation, error);
    }

    pub async fn clear_failures(&self) {
        self.state.write().await.failures.clear();
    }

    /// All calls made so far, in order.
    pub async fn calls(&self) -> Vec<ApiCall> {
        self.state.read().await.calls.clone()
    }

    /// Calls that changed remote state.
    pub async fn mutations(&self) -> Vec<ApiCall> {
        self.state
            .read()
            .await
            .calls
            .iter()
            .filter(|c| c.is_mutation())
            .cloned()
            .collect()
    }

    pub async fn clear_calls(&self) {
        self.state.write().await.calls.clear();
    }

    pub async fn task(&self, task: TaskId) -> Option<TaskInfo> {
        self.state.read().await.tasks.get(&task).cloned()
    }

    pub async fn room_of(&self, user: UserId) -> Option<RoomInfo> {
        let state = self.state.read().await;
        state
            .memberships
            .get(&user)
            .and_then(|id| state.rooms.get(id))
            .cloned()
    }
}

#[async_trait]
impl TaskApi for InMemoryTaskApi {
    async fn create_user(&self, user: UserId) -> Result<UserRegistration, ApiError> {
        let mut state = self.state.write().await;
        state.record(ApiCall::CreateUser(user))?;
        if state.users.insert(user) {
            Ok(UserRegistration::Created)
        } else {
            Ok(UserRegistration::AlreadyExists)
        }
    }

    async fn get_room_info(&self, user: UserId) -> Result<Option<RoomInfo>, ApiError> {
        let mut state = self.state.write().await;
        state.record(ApiCall::GetRoomInfo(user))?;
        Ok(state
            .memberships
            .get(&user)
            .and_then(|id| state.rooms.get(id))
            .cloned())
    }

    async fn create_room(&self, name: &str, user: UserId) -> Result<RoomId, ApiError> {
        let mut state = self.state.write().await;
        state.record(ApiCall::CreateRoom {
            name: name.to_string(),
            user,
        })?;
        state.next_room_id += 1;
        let id = RoomId::new(state.next_room_id);
        state.rooms.insert(id, RoomInfo::new(id, name));
        state.memberships.insert(user, id);
        Ok(id)
    }

    async fn get_task_info(&self, task: TaskId, user: UserId) -> Result<TaskInfo, ApiError> {
        let mut state = self.state.write().await;
        state.record(ApiCall::GetTaskInfo { task, user })?;
        state
            .tasks
            .get(&task)
            .cloned()
            .ok_or_else(|| ApiError::not_found("task"))
    }

    async fn get_order_info(&self, order: OrderId, user: UserId) -> Result<OrderInfo, ApiError> {
        let mut state = self.state.write().await;
        state.record(ApiCall::GetOrderInfo { order, user })?;
        state
            .orders
            .get(&order)
            .cloned()
            .ok_or_else(|| ApiError::not_found("order"))
    }

    async fn modify_task(&self, patch: &TaskPatch, user: UserId) -> Result<(), ApiError> {
        let mut state = self.state.write().await;
        state.record(ApiCall::ModifyTask {
            patch: patch.clone(),
            user,
        })?;
        let task = state
            .tasks
            .get_mut(&patch.id)
            .ok_or_else(|| ApiError::not_found("task"))?;
        patch.apply_to(task);
        Ok(())
    }

    async fn delete_task(&self, task: TaskId, user: UserId) -> Result<(), ApiError> {
        let mut state = self.state.write().await;
        state.record(ApiCall::DeleteTask { task, user })?;
        state
            .tasks
            .remove(&task)
            .map(|_| ())
            .ok_or_else(|| ApiError::not_found("task"))
    }
}
