//! # REST façade
//!
//! Stateless request handlers, one module per resource. Each handler
//! resolves the caller through the extractors in [`crate::auth`], validates
//! the request with [`validate`], calls the ownership-scoped store and maps
//! the result to a JSON response. Errors flow out as
//! [`ApiError`](crate::error::ApiError) and become `{"error": message}`
//! bodies with the mapped status.

pub mod auth;
pub mod boards;
pub mod todos;
pub mod validate;

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};

use crate::error::ApiError;
use crate::state::AppState;

/// Router for everything under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/me", get(auth::me))
        .route("/boards", get(boards::list).post(boards::create))
        .route(
            "/boards/{id}",
            get(boards::fetch).put(boards::update).delete(boards::remove),
        )
        .route("/todos/board/{board_id}", get(todos::list_for_board))
        .route("/todos", post(todos::create))
        .route("/todos/{id}", put(todos::update).delete(todos::remove))
        .route("/todos/{id}/status", patch(todos::set_status))
}

/// Unwrap a JSON body, turning axum's rejection (malformed JSON, wrong
/// content type) into a 400 validation error instead of the default 422.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
    }
}
