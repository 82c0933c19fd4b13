//! Shared application state, assembled once at startup and injected into the
//! router — the verifier and settings travel by dependency injection, never
//! through process globals.

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenVerifier;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub verifier: Arc<dyn TokenVerifier>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pool: PgPool, verifier: Arc<dyn TokenVerifier>, settings: Settings) -> Self {
        Self {
            pool,
            verifier,
            settings: Arc::new(settings),
        }
    }
}
