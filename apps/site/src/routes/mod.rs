pub mod health;

use axum::{routing::get, Router};

use crate::page::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/r/:user_id/:resume_slug",
            get(handlers::handle_resume_page),
        )
        .route(
            "/r/:user_id/:resume_slug/download",
            get(handlers::handle_download),
        )
        .with_state(state)
}
