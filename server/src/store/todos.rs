//! Todo collection, scoped by owner and optionally by board.

use api::models::{TodoPriority, TodoStatus};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Todo;

/// Validated todo fields, produced by the façade.
#[derive(Debug, Clone)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub due_date: Option<NaiveDate>,
}

/// Todos of `owner` on `board`, newest first.
pub async fn list_for_board(pool: &PgPool, owner: Uuid, board: Uuid) -> sqlx::Result<Vec<Todo>> {
    sqlx::query_as(
        r#"
        SELECT * FROM todos
        WHERE owner_id = $1 AND board_id = $2
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner)
    .bind(board)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    owner: Uuid,
    board: Uuid,
    fields: &TodoFields,
) -> sqlx::Result<Todo> {
    sqlx::query_as(
        r#"
        INSERT INTO todos (title, description, status, priority, due_date, board_id, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(fields.status.as_str())
    .bind(fields.priority.as_str())
    .bind(fields.due_date)
    .bind(board)
    .bind(owner)
    .fetch_one(pool)
    .await
}

/// Full replace; refreshes `updated_at`. The todo stays on its board.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    owner: Uuid,
    fields: &TodoFields,
) -> sqlx::Result<Option<Todo>> {
    sqlx::query_as(
        r#"
        UPDATE todos
        SET title = $3, description = $4, status = $5, priority = $6,
            due_date = $7, updated_at = NOW()
        WHERE id = $1 AND owner_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(owner)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(fields.status.as_str())
    .bind(fields.priority.as_str())
    .bind(fields.due_date)
    .fetch_optional(pool)
    .await
}

/// Narrow variant: touches `status` and `updated_at` only.
pub async fn set_status(
    pool: &PgPool,
    id: Uuid,
    owner: Uuid,
    status: TodoStatus,
) -> sqlx::Result<Option<Todo>> {
    sqlx::query_as(
        r#"
        UPDATE todos
        SET status = $3, updated_at = NOW()
        WHERE id = $1 AND owner_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(owner)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid, owner: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND owner_id = $2")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
