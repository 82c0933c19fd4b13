use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use server::auth::HttpTokenVerifier;
use server::settings::Settings;
use server::state::AppState;
use server::{db, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).init();

    let settings = Settings::new().context("failed to load settings")?;
    if settings.auth.bypass {
        warn!("authentication bypass is ENABLED; every request gets a synthetic identity — never deploy this");
    }

    let pool = db::connect(&settings.database).await?;
    let verifier = Arc::new(HttpTokenVerifier::new(&settings.auth));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server.host/server.port")?;
    let assets = settings.server.assets.clone();
    let state = AppState::new(pool, verifier, settings);

    // REST under /api, the built web client for everything else. Permissive
    // CORS so `dx serve` on another port can reach the API during development.
    let app = Router::new()
        .nest("/api", routes::router())
        .with_state(state)
        .fallback_service(ServeDir::new(&assets).append_index_html_on_directories(true))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Taskdeck server listening on {addr}");

    axum::serve(listener, app.into_make_service())
        .await
        .context("server exited")?;
    Ok(())
}
