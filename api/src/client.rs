//! Typed REST client for the Taskdeck backend.
//!
//! Wraps `reqwest` with the base URL of the backend and the caller's bearer
//! credential. Every method mirrors one façade route; non-success responses
//! are decoded from the `{"error": message}` body into [`ClientError::Api`]
//! so views can show the server's message directly.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{
    BoardInfo, BoardPayload, ErrorBody, MessageResponse, RegisterRequest, RegisterResponse,
    StatusPayload, TodoInfo, TodoPayload, UserInfo,
};

/// Errors surfaced by [`ApiClient`] and [`crate::IdentityClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad TLS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with an error status and message.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The client is missing build-time configuration; no request was made.
    #[error("{0}")]
    Config(String),
}

impl ClientError {
    /// True when the server rejected the credential (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ClientError::Api {
                status: 401,
                ..
            }
        )
    }
}

/// Client for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the API served at `base_url` (no trailing slash),
    /// attaching `token` as a bearer credential when present.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/api{}", self.base_url, path);
        let req = self.http.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(decode_error(status, response).await)
        }
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(self.request(method, path).json(body)).await
    }

    /// `POST /api/auth/register` — upsert the caller's user record.
    pub async fn register(&self, body: &RegisterRequest) -> Result<RegisterResponse, ClientError> {
        self.send_json(Method::POST, "/auth/register", body).await
    }

    /// `GET /api/auth/me`.
    pub async fn me(&self) -> Result<UserInfo, ClientError> {
        self.send(self.request(Method::GET, "/auth/me")).await
    }

    /// `GET /api/boards`.
    pub async fn boards(&self) -> Result<Vec<BoardInfo>, ClientError> {
        self.send(self.request(Method::GET, "/boards")).await
    }

    /// `GET /api/boards/:id`.
    pub async fn board(&self, id: &str) -> Result<BoardInfo, ClientError> {
        self.send(self.request(Method::GET, &format!("/boards/{id}")))
            .await
    }

    /// `POST /api/boards`.
    pub async fn create_board(&self, body: &BoardPayload) -> Result<BoardInfo, ClientError> {
        self.send_json(Method::POST, "/boards", body).await
    }

    /// `PUT /api/boards/:id`.
    pub async fn update_board(
        &self,
        id: &str,
        body: &BoardPayload,
    ) -> Result<BoardInfo, ClientError> {
        self.send_json(Method::PUT, &format!("/boards/{id}"), body)
            .await
    }

    /// `DELETE /api/boards/:id`.
    pub async fn delete_board(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.send(self.request(Method::DELETE, &format!("/boards/{id}")))
            .await
    }

    /// `GET /api/todos/board/:boardId`.
    pub async fn todos_for_board(&self, board_id: &str) -> Result<Vec<TodoInfo>, ClientError> {
        self.send(self.request(Method::GET, &format!("/todos/board/{board_id}")))
            .await
    }

    /// `POST /api/todos`.
    pub async fn create_todo(&self, body: &TodoPayload) -> Result<TodoInfo, ClientError> {
        self.send_json(Method::POST, "/todos", body).await
    }

    /// `PUT /api/todos/:id`.
    pub async fn update_todo(&self, id: &str, body: &TodoPayload) -> Result<TodoInfo, ClientError> {
        self.send_json(Method::PUT, &format!("/todos/{id}"), body)
            .await
    }

    /// `DELETE /api/todos/:id`.
    pub async fn delete_todo(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.send(self.request(Method::DELETE, &format!("/todos/{id}")))
            .await
    }

    /// `PATCH /api/todos/:id/status` — narrow status-only update.
    pub async fn update_todo_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<TodoInfo, ClientError> {
        let body = StatusPayload {
            status: Some(status.to_string()),
        };
        self.send_json(Method::PATCH, &format!("/todos/{id}/status"), &body)
            .await
    }
}

pub(crate) async fn decode_error(status: StatusCode, response: reqwest::Response) -> ClientError {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {}", status.as_u16()),
    };
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_reads_as_its_message() {
        let err = ClientError::Config("Identity provider key is not configured".into());
        assert_eq!(err.to_string(), "Identity provider key is not configured");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_only_401_reads_as_unauthorized() {
        let unauthorized = ClientError::Api {
            status: 401,
            message: "Invalid or expired credential".into(),
        };
        assert!(unauthorized.is_unauthorized());

        let missing = ClientError::Api {
            status: 404,
            message: "Board not found".into(),
        };
        assert!(!missing.is_unauthorized());
    }
}
