//! PostgreSQL connection pool and embedded migrations.
//!
//! The pool is built once at startup and handed to every component through
//! [`crate::state::AppState`] — there is no lazily-initialized global.

use anyhow::Context as _;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::settings;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connect to Postgres and bring the schema up to date.
pub async fn connect(settings: &settings::Database) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&settings.url())
        .await
        .context("failed to connect to the database")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    Ok(pool)
}
