//! `/api/todos` — todo CRUD and the narrow status transition.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use api::models::{StatusPayload, TodoInfo, TodoPayload};

use super::{json_body, validate};
use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::store;

fn todo_fields(payload: &TodoPayload) -> Result<store::todos::TodoFields, ApiError> {
    Ok(store::todos::TodoFields {
        title: validate::required_title(payload.title.as_deref(), "Todo")?,
        description: validate::optional_text(payload.description.as_deref()),
        status: validate::status(payload.status.as_deref())?,
        priority: validate::priority(payload.priority.as_deref())?,
        due_date: validate::due_date(payload.due_date.as_deref())?,
    })
}

/// `GET /api/todos/board/:boardId` — todos of one of the caller's boards,
/// newest first. A foreign board yields an empty list, same as an empty one.
pub async fn list_for_board(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(board_id): Path<Uuid>,
) -> ApiResult<Json<Vec<TodoInfo>>> {
    let todos = store::todos::list_for_board(&state.pool, user.id, board_id).await?;
    Ok(Json(todos.iter().map(|t| t.to_info()).collect()))
}

/// `POST /api/todos` — 201 with the created todo. The target board must
/// exist and belong to the caller.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Result<Json<TodoPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoInfo>)> {
    let payload = json_body(body)?;
    let board_id = validate::board_id(payload.board_id.as_deref())?;
    let fields = todo_fields(&payload)?;

    store::boards::get(&state.pool, board_id, user.id)
        .await?
        .ok_or(ApiError::NotFound("Board"))?;

    let todo = store::todos::create(&state.pool, user.id, board_id, &fields).await?;
    Ok((StatusCode::CREATED, Json(todo.to_info())))
}

/// `PUT /api/todos/:id` — full replace of the editable fields.
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    body: Result<Json<TodoPayload>, JsonRejection>,
) -> ApiResult<Json<TodoInfo>> {
    let payload = json_body(body)?;
    let fields = todo_fields(&payload)?;
    let todo = store::todos::update(&state.pool, id, user.id, &fields)
        .await?
        .ok_or(ApiError::NotFound("Todo"))?;
    Ok(Json(todo.to_info()))
}

/// `PATCH /api/todos/:id/status` — status and `updated_at` only; any value
/// outside the closed set is rejected before the store is touched.
pub async fn set_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    body: Result<Json<StatusPayload>, JsonRejection>,
) -> ApiResult<Json<TodoInfo>> {
    let payload = json_body(body)?;
    let status = validate::required_status(payload.status.as_deref())?;
    let todo = store::todos::set_status(&state.pool, id, user.id, status)
        .await?
        .ok_or(ApiError::NotFound("Todo"))?;
    Ok(Json(todo.to_info()))
}

/// `DELETE /api/todos/:id`.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    if !store::todos::delete(&state.pool, id, user.id).await? {
        return Err(ApiError::NotFound("Todo"));
    }
    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}
