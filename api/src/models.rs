//! # Domain models shared between server and client
//!
//! Defines the data structures that cross the REST boundary. These types are
//! `Serialize + Deserialize` and use camelCase field names on the wire
//! (`colorTag`, `boardId`, `dueDate`, ...), matching the JSON the façade
//! accepts and returns.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The caller's local user record: id, email, display name. |
//! | [`BoardInfo`] | A board owned by the caller, with its color tag and timestamps. |
//! | [`TodoInfo`] | A task on a board: status, priority, optional due date, timestamps. |
//! | [`BoardPayload`] / [`TodoPayload`] / [`StatusPayload`] | Request bodies for create/update operations. All fields are optional strings so the façade — not serde — decides what is missing or invalid. |
//!
//! ## Enumerations
//!
//! [`TodoStatus`] (`todo`, `in-progress`, `done`) and [`TodoPriority`]
//! (`low`, `medium`, `high`) are closed sets. They parse from and display as
//! their wire spelling; anything else is rejected at the façade with a
//! validation error, never stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Status of a todo. Defaults to [`TodoStatus::Todo`] on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    Todo,
    InProgress,
    Done,
}

impl TodoStatus {
    /// Every accepted value, in board-column order.
    pub const ALL: [TodoStatus; 3] = [TodoStatus::Todo, TodoStatus::InProgress, TodoStatus::Done];

    /// Wire spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "todo",
            TodoStatus::InProgress => "in-progress",
            TodoStatus::Done => "done",
        }
    }

    /// Parse the wire spelling. Returns `None` for anything outside the set.
    pub fn parse(s: &str) -> Option<TodoStatus> {
        match s {
            "todo" => Some(TodoStatus::Todo),
            "in-progress" => Some(TodoStatus::InProgress),
            "done" => Some(TodoStatus::Done),
            _ => None,
        }
    }

    /// Human-readable column label.
    pub fn label(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "To Do",
            TodoStatus::InProgress => "In Progress",
            TodoStatus::Done => "Done",
        }
    }
}

impl Default for TodoStatus {
    fn default() -> Self {
        TodoStatus::Todo
    }
}

impl std::fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a todo. Defaults to [`TodoPriority::Medium`] on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TodoPriority {
    Low,
    Medium,
    High,
}

impl TodoPriority {
    pub const ALL: [TodoPriority; 3] =
        [TodoPriority::Low, TodoPriority::Medium, TodoPriority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoPriority::Low => "low",
            TodoPriority::Medium => "medium",
            TodoPriority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<TodoPriority> {
        match s {
            "low" => Some(TodoPriority::Low),
            "medium" => Some(TodoPriority::Medium),
            "high" => Some(TodoPriority::High),
            _ => None,
        }
    }
}

impl Default for TodoPriority {
    fn default() -> Self {
        TodoPriority::Medium
    }
}

impl std::fmt::Display for TodoPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl UserInfo {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A board owned by the requesting user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub color_tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A todo on one of the requesting user's boards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub due_date: Option<NaiveDate>,
    pub board_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/auth/register`. Both fields may be omitted; the server
/// falls back to the identity provider's claims.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response of `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserInfo,
}

/// Body of `POST /api/boards` and `PUT /api/boards/:id` (full replace).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color_tag: Option<String>,
}

/// Body of `POST /api/todos` and `PUT /api/todos/:id` (full replace).
/// `board_id` is only consulted on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub board_id: Option<String>,
}

/// Body of `PATCH /api/todos/:id/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPayload {
    #[serde(default)]
    pub status: Option<String>,
}

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned by the façade: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(TodoStatus::InProgress.as_str(), "in-progress");
        assert_eq!(
            serde_json::to_string(&TodoStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let parsed: TodoStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, TodoStatus::InProgress);
    }

    #[test]
    fn test_status_closed_set() {
        for s in TodoStatus::ALL {
            assert_eq!(TodoStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(TodoStatus::parse("archived"), None);
        assert_eq!(TodoStatus::parse("Todo"), None);
        assert_eq!(TodoStatus::parse(""), None);
    }

    #[test]
    fn test_priority_closed_set() {
        for p in TodoPriority::ALL {
            assert_eq!(TodoPriority::parse(p.as_str()), Some(p));
        }
        assert_eq!(TodoPriority::parse("urgent"), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TodoStatus::default(), TodoStatus::Todo);
        assert_eq!(TodoPriority::default(), TodoPriority::Medium);
    }

    #[test]
    fn test_camel_case_wire_fields() {
        let board = BoardInfo {
            id: "b1".into(),
            title: "Work".into(),
            description: String::new(),
            color_tag: "#6366f1".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&board).unwrap();
        assert!(json.get("colorTag").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("color_tag").is_none());
    }

    #[test]
    fn test_todo_payload_accepts_partial_bodies() {
        let payload: TodoPayload = serde_json::from_str("{\"title\": \"Ship it\"}").unwrap();
        assert_eq!(payload.title.as_deref(), Some("Ship it"));
        assert!(payload.status.is_none());
        assert!(payload.board_id.is_none());

        let empty: TodoPayload = serde_json::from_str("{}").unwrap();
        assert!(empty.title.is_none());
    }
}
