use std::sync::Arc;

use crate::config::Config;
use crate::models::resume::Resume;
use crate::page::session::SessionVerifier;
use crate::page::settings::SettingsStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Per-slug page settings. Default: `PgSettingsStore`.
    pub settings: Arc<dyn SettingsStore>,
    /// Session check for authenticated-only resumes. `NoSessions` when AUTH_URL is unset.
    pub sessions: Arc<dyn SessionVerifier>,
    /// Resume body rendered on every page; the built-in sample for now.
    pub resume: Arc<Resume>,
    pub config: Config,
}
