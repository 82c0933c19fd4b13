//! Board collection, scoped by owner.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Board;

/// Validated board fields, produced by the façade.
#[derive(Debug, Clone)]
pub struct BoardFields {
    pub title: String,
    pub description: String,
    pub color_tag: String,
}

/// All boards of `owner`, newest first.
pub async fn list(pool: &PgPool, owner: Uuid) -> sqlx::Result<Vec<Board>> {
    sqlx::query_as("SELECT * FROM boards WHERE owner_id = $1 ORDER BY created_at DESC")
        .bind(owner)
        .fetch_all(pool)
        .await
}

pub async fn get(pool: &PgPool, id: Uuid, owner: Uuid) -> sqlx::Result<Option<Board>> {
    sqlx::query_as("SELECT * FROM boards WHERE id = $1 AND owner_id = $2")
        .bind(id)
        .bind(owner)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, owner: Uuid, fields: &BoardFields) -> sqlx::Result<Board> {
    sqlx::query_as(
        r#"
        INSERT INTO boards (title, description, color_tag, owner_id)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(&fields.color_tag)
    .bind(owner)
    .fetch_one(pool)
    .await
}

/// Full replace; refreshes `updated_at`. `None` when the board does not
/// exist for this owner.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    owner: Uuid,
    fields: &BoardFields,
) -> sqlx::Result<Option<Board>> {
    sqlx::query_as(
        r#"
        UPDATE boards
        SET title = $3, description = $4, color_tag = $5, updated_at = NOW()
        WHERE id = $1 AND owner_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(owner)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(&fields.color_tag)
    .fetch_optional(pool)
    .await
}

/// Deletes the board; its todos go with it via the schema's cascade.
/// `false` when nothing matched.
pub async fn delete(pool: &PgPool, id: Uuid, owner: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM boards WHERE id = $1 AND owner_id = $2")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
