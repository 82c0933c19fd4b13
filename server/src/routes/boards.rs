//! `/api/boards` — board CRUD.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use api::models::{BoardInfo, BoardPayload};

use super::{json_body, validate};
use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::store;

fn board_fields(payload: &BoardPayload) -> Result<store::boards::BoardFields, ApiError> {
    Ok(store::boards::BoardFields {
        title: validate::required_title(payload.title.as_deref(), "Board")?,
        description: validate::optional_text(payload.description.as_deref()),
        color_tag: validate::color_tag(payload.color_tag.as_deref()),
    })
}

/// `GET /api/boards` — the caller's boards, newest first.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<BoardInfo>>> {
    let boards = store::boards::list(&state.pool, user.id).await?;
    Ok(Json(boards.iter().map(|b| b.to_info()).collect()))
}

/// `GET /api/boards/:id`.
pub async fn fetch(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<BoardInfo>> {
    let board = store::boards::get(&state.pool, id, user.id)
        .await?
        .ok_or(ApiError::NotFound("Board"))?;
    Ok(Json(board.to_info()))
}

/// `POST /api/boards` — 201 with the created board.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Result<Json<BoardPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<BoardInfo>)> {
    let payload = json_body(body)?;
    let fields = board_fields(&payload)?;
    let board = store::boards::create(&state.pool, user.id, &fields).await?;
    Ok((StatusCode::CREATED, Json(board.to_info())))
}

/// `PUT /api/boards/:id` — full replace.
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    body: Result<Json<BoardPayload>, JsonRejection>,
) -> ApiResult<Json<BoardInfo>> {
    let payload = json_body(body)?;
    let fields = board_fields(&payload)?;
    let board = store::boards::update(&state.pool, id, user.id, &fields)
        .await?
        .ok_or(ApiError::NotFound("Board"))?;
    Ok(Json(board.to_info()))
}

/// `DELETE /api/boards/:id` — cascades to the board's todos.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    if !store::boards::delete(&state.pool, id, user.id).await? {
        return Err(ApiError::NotFound("Board"));
    }
    Ok(Json(json!({ "message": "Board deleted successfully" })))
}
