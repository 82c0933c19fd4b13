//! # Taskdeck server
//!
//! The axum backend behind the Taskdeck web client: a thin, ownership-scoped
//! REST layer over Postgres, with authentication delegated to an external
//! identity provider.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`settings`] | Layered configuration (defaults → `config.toml` → environment) |
//! | [`error`] | `ApiError` taxonomy and its HTTP/JSON mapping |
//! | [`db`] | Connection pool and embedded migrations |
//! | [`auth`] | Bearer-credential verification and request extractors |
//! | [`users`] | User directory: subject-id → local user, upsert-based |
//! | [`store`] | Ownership-scoped CRUD for boards and todos |
//! | [`routes`] | The REST façade under `/api` |
//! | [`state`] | `AppState` injected into every handler |

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod settings;
pub mod state;
pub mod store;
pub mod users;
