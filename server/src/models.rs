//! Database rows for users, boards and todos.
//!
//! These are the server-side counterparts of the client-safe projections in
//! the `api` crate. Rows derive [`sqlx::FromRow`] and carry every column;
//! the `to_info` methods project them for the wire, converting UUIDs to
//! strings and status/priority text to the typed enumerations. The text is
//! only ever written through the façade's validation, so an out-of-set value
//! in a row would indicate outside tampering; `to_info` falls back to the
//! defaults rather than panicking.

use api::models::{BoardInfo, TodoInfo, TodoPriority, TodoStatus, UserInfo};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user record from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub subject_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Full board record from the `boards` table.
#[derive(Debug, Clone, FromRow)]
pub struct Board {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub color_tag: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn to_info(&self) -> BoardInfo {
        BoardInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            color_tag: self.color_tag.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Full todo record from the `todos` table.
#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub due_date: Option<NaiveDate>,
    pub board_id: Uuid,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    pub fn to_info(&self) -> TodoInfo {
        TodoInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            status: TodoStatus::parse(&self.status).unwrap_or_default(),
            priority: TodoPriority::parse(&self.priority).unwrap_or_default(),
            due_date: self.due_date,
            board_id: self.board_id.to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
