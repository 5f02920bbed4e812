//! HTTP Task API - Implementation of TaskApi over the service's JSON API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpApiConfig::new("https://tasks.example.com/api")
//!     .with_token(token)
//!     .with_timeout(Duration::from_secs(10));
//!
//! let api = HttpTaskApi::new(config)?;
//! ```
//!
//! # Endpoints
//!
//! All calls pass the acting user as the `user_id` query parameter.
//!
//! | Call | Request | Notes |
//! |---|---|---|
//! | create_user | `POST /users` | 409 means already registered |
//! | get_room_info | `GET /rooms/current` | 404 means no room |
//! | create_room | `POST /rooms` | returns `{ "id": .. }` |
//! | get_task_info | `GET /tasks/{id}` | |
//! | get_order_info | `GET /orders/{id}` | |
//! | modify_task | `PATCH /tasks` | body is the partial task |
//! | delete_task | `DELETE /tasks/{id}` | |

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::{OrderId, RoomId, TaskId, UserId};
use crate::domain::room::RoomInfo;
use crate::domain::task::{OrderInfo, TaskInfo, TaskPatch};
use crate::ports::{ApiError, TaskApi, UserRegistration};

/// Configuration for the HTTP task API client.
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Bearer token, if the service requires one.
    token: Option<Secret<String>>,
}

impl HttpApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
            token: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: Secret<String>) -> Self {
        self.token = Some(token);
        self
    }
}

#[derive(Debug, Serialize)]
struct CreateUserBody {
    user_id: UserId,
}

#[derive(Debug, Serialize)]
struct CreateRoomBody<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateRoomResponse {
    id: RoomId,
}

/// Task API client over HTTP.
pub struct HttpTaskApi {
    config: HttpApiConfig,
    client: Client,
}

impl HttpTaskApi {
    pub fn new(config: HttpApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn request(&self, method: Method, path: &str, user: UserId) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .query(&[("user_id", user.get())]);

        match &self.config.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                ApiError::network(format!("Connection failed: {}", e))
            } else {
                ApiError::network(e.to_string())
            }
        })
    }

    /// Passes successful responses through and turns the rest into errors.
    async fn check_status(response: Response, entity: &'static str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, body, entity))
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: Response,
        entity: &'static str,
    ) -> Result<T, ApiError> {
        let response = Self::check_status(response, entity).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("Failed to parse {}: {}", entity, e)))
    }
}

/// Maps a non-success status to an API error.
fn status_error(status: StatusCode, body: String, entity: &'static str) -> ApiError {
    match status.as_u16() {
        401 | 403 => ApiError::Unauthorized,
        404 => ApiError::not_found(entity),
        500..=599 => ApiError::unavailable(format!("Server error {}: {}", status, body)),
        code => ApiError::Status { status: code, body },
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn create_user(&self, user: UserId) -> Result<UserRegistration, ApiError> {
        tracing::debug!(user_id = %user, "registering user");
        let response = self
            .send(
                self.request(Method::POST, "/users", user)
                    .json(&CreateUserBody { user_id: user }),
            )
            .await?;

        if response.status() == StatusCode::CONFLICT {
            return Ok(UserRegistration::AlreadyExists);
        }
        Self::check_status(response, "user").await?;
        Ok(UserRegistration::Created)
    }

    async fn get_room_info(&self, user: UserId) -> Result<Option<RoomInfo>, ApiError> {
        tracing::debug!(user_id = %user, "fetching room of user");
        let response = self
            .send(self.request(Method::GET, "/rooms/current", user))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::read_json(response, "room").await.map(Some)
    }

    async fn create_room(&self, name: &str, user: UserId) -> Result<RoomId, ApiError> {
        tracing::debug!(user_id = %user, name, "creating room");
        let response = self
            .send(
                self.request(Method::POST, "/rooms", user)
                    .json(&CreateRoomBody { name }),
            )
            .await?;

        let created: CreateRoomResponse = Self::read_json(response, "room").await?;
        Ok(created.id)
    }

    async fn get_task_info(&self, task: TaskId, user: UserId) -> Result<TaskInfo, ApiError> {
        tracing::debug!(user_id = %user, task_id = %task, "fetching task");
        let response = self
            .send(self.request(Method::GET, &format!("/tasks/{}", task), user))
            .await?;
        Self::read_json(response, "task").await
    }

    async fn get_order_info(&self, order: OrderId, user: UserId) -> Result<OrderInfo, ApiError> {
        tracing::debug!(user_id = %user, order_id = %order, "fetching order");
        let response = self
            .send(self.request(Method::GET, &format!("/orders/{}", order), user))
            .await?;
        Self::read_json(response, "order").await
    }

    async fn modify_task(&self, patch: &TaskPatch, user: UserId) -> Result<(), ApiError> {
        tracing::debug!(user_id = %user, task_id = %patch.id, "modifying task");
        let response = self
            .send(self.request(Method::PATCH, "/tasks", user).json(patch))
            .await?;
        Self::check_status(response, "task").await?;
        Ok(())
    }

    async fn delete_task(&self, task: TaskId, user: UserId) -> Result<(), ApiError> {
        tracing::debug!(user_id = %user, task_id = %task, "deleting task");
        let response = self
            .send(self.request(Method::DELETE, &format!("/tasks/{}", task), user))
            .await?;
        Self::check_status(response, "task").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> HttpTaskApi {
        HttpTaskApi::new(HttpApiConfig::new("http://localhost:8000/api/")).unwrap()
    }

    #[test]
    fn config_trims_trailing_slash() {
        let config = HttpApiConfig::new("http://localhost:8000/api///");
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn config_defaults_to_ten_second_timeout() {
        let config = HttpApiConfig::new("http://x");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(api().url("/tasks/3"), "http://localhost:8000/api/tasks/3");
    }

    #[test]
    fn request_carries_user_id_query() {
        let request = api()
            .request(Method::GET, "/tasks/3", UserId::new(77))
            .build()
            .unwrap();
        assert_eq!(request.url().query(), Some("user_id=77"));
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn request_carries_bearer_token_when_configured() {
        let config = HttpApiConfig::new("http://x").with_token(Secret::new("s3cret".to_string()));
        let api = HttpTaskApi::new(config).unwrap();
        let request = api
            .request(Method::DELETE, "/tasks/1", UserId::new(1))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer s3cret"
        );
    }

    #[test]
    fn status_errors_map_by_code() {
        assert_eq!(
            status_error(StatusCode::UNAUTHORIZED, String::new(), "task"),
            ApiError::Unauthorized
        );
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, String::new(), "task"),
            ApiError::not_found("task")
        );
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, "oops".to_string(), "task"),
            ApiError::Unavailable { .. }
        ));
        assert_eq!(
            status_error(StatusCode::UNPROCESSABLE_ENTITY, "bad".to_string(), "task"),
            ApiError::Status {
                status: 422,
                body: "bad".to_string()
            }
        );
    }

    #[test]
    fn create_room_response_parses_id() {
        let parsed: CreateRoomResponse = serde_json::from_str(r#"{"id": 12}"#).unwrap();
        assert_eq!(parsed.id, RoomId::new(12));
    }
}
