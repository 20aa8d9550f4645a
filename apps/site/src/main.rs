mod config;
mod db;
mod errors;
mod models;
mod page;
mod preferences;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::models::sample::sample_resume;
use crate::page::session::{HttpSessionVerifier, NoSessions, SessionVerifier};
use crate::page::settings::PgSettingsStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume site v{}", env!("CARGO_PKG_VERSION"));

    // Settings store (PostgreSQL)
    let db = create_pool(&config.database_url)?;
    let settings = Arc::new(PgSettingsStore::new(db));

    // Session verifier
    let sessions: Arc<dyn SessionVerifier> = match &config.auth_url {
        Some(url) => {
            info!("Session checks via {url}");
            Arc::new(HttpSessionVerifier::new(url.clone(), config.auth_api_key.clone()))
        }
        None => {
            warn!("AUTH_URL not set; authenticated-only resumes will be refused");
            Arc::new(NoSessions)
        }
    };

    let state = AppState {
        settings,
        sessions,
        resume: Arc::new(sample_resume()),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
