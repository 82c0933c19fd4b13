//! # API crate — shared types and REST client for Taskdeck
//!
//! This crate is the boundary between the Taskdeck backend and its frontends.
//! It compiles on both native targets and `wasm32`, so everything here must
//! stay free of server-only dependencies.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Client-safe data model: `UserInfo`, `BoardInfo`, `TodoInfo`, the `TodoStatus`/`TodoPriority` enumerations and the request payloads the REST façade accepts |
//! | [`client`] | [`ApiClient`] — a typed reqwest client for the backend REST API, attaching the bearer credential to every call |
//! | [`identity`] | [`IdentityClient`] — email/password sign-in and sign-up against the third-party identity provider, yielding the bearer token the backend verifies |

pub mod client;
pub mod identity;
pub mod models;

pub use client::{ApiClient, ClientError};
pub use identity::{IdentityClient, IdentityToken};
pub use models::{
    BoardInfo, BoardPayload, RegisterRequest, RegisterResponse, StatusPayload, TodoInfo,
    TodoPayload, TodoPriority, TodoStatus, UserInfo,
};
