//! `/api/auth` — registration and the current user.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use api::models::{RegisterRequest, RegisterResponse, UserInfo};

use super::json_body;
use crate::auth::Identity;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::users;

/// `POST /api/auth/register` — idempotent upsert of the caller's record,
/// refreshing email/name from the body when provided.
pub async fn register(
    State(state): State<AppState>,
    Identity(identity): Identity,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<RegisterResponse>> {
    let payload = json_body(body)?;
    let user = users::register_user(&state.pool, &identity, payload.email, payload.name).await?;
    Ok(Json(RegisterResponse {
        message: "Authentication successful".to_string(),
        user: user.to_info(),
    }))
}

/// `GET /api/auth/me` — the caller's record, 404 if they never registered.
/// Deliberately does not lazy-create: this route answers "who am I locally",
/// not "make me exist".
pub async fn me(
    State(state): State<AppState>,
    Identity(identity): Identity,
) -> ApiResult<Json<UserInfo>> {
    let user = users::find_by_subject(&state.pool, &identity.subject_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(user.to_info()))
}
