//! Ordered access gates for a resume page: exists → published → session.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::errors::AppError;
use crate::models::settings::{ResumeSettingsRow, Visibility};
use crate::page::document;
use crate::page::session::SessionVerifier;
use crate::page::settings::SettingsStore;

/// Why a resume page cannot be shown. Each variant carries a fixed,
/// viewer-facing message; causes of `LoadFailed` are logged, never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Resume not found")]
    NotFound,

    #[error("This resume is not currently published")]
    Unpublished,

    #[error("You must be logged in to view this resume")]
    LoginRequired,

    #[error("Failed to load resume")]
    LoadFailed,
}

impl PageError {
    pub fn status(self) -> StatusCode {
        match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Unpublished => StatusCode::FORBIDDEN,
            PageError::LoginRequired => StatusCode::UNAUTHORIZED,
            PageError::LoadFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let body = document::render_error(self).into_string();
        (self.status(), Html(body)).into_response()
    }
}

/// JSON surfaces (downloads) report gate failures through `AppError`.
impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        let message = err.to_string();
        match err {
            PageError::NotFound => AppError::NotFound(message),
            PageError::Unpublished => AppError::Forbidden(message),
            PageError::LoginRequired => AppError::Unauthorized(message),
            PageError::LoadFailed => AppError::Internal(anyhow::anyhow!(message)),
        }
    }
}

/// Loads the settings for `slug` and applies the gates in order.
///
/// `publish_resume_page = false` fails before visibility is looked at, so an
/// unpublished resume never asks for a session.
pub async fn check_access(
    store: &dyn SettingsStore,
    sessions: &dyn SessionVerifier,
    slug: &str,
    access_token: Option<&str>,
) -> Result<ResumeSettingsRow, PageError> {
    let settings = store
        .find_by_slug(slug)
        .await
        .map_err(|e| {
            error!(slug, "Failed to load resume settings: {e}");
            PageError::LoadFailed
        })?
        .ok_or(PageError::NotFound)?;

    if !settings.publish_resume_page {
        return Err(PageError::Unpublished);
    }

    if settings.visibility() == Visibility::Authenticated {
        let Some(token) = access_token else {
            debug!(slug, "Authenticated-only resume requested without a token");
            return Err(PageError::LoginRequired);
        };
        let active = sessions.has_session(token).await.map_err(|e| {
            error!(slug, "Session check failed: {e}");
            PageError::LoadFailed
        })?;
        if !active {
            return Err(PageError::LoginRequired);
        }
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::models::settings::fixtures::settings_row;
    use crate::page::session::fake::StaticSessions;
    use crate::page::settings::memory::MemorySettingsStore;

    /// Fails the test if consulted.
    struct NeverAsked;

    #[async_trait]
    impl SessionVerifier for NeverAsked {
        async fn has_session(&self, _token: &str) -> Result<bool, AppError> {
            panic!("session check must not run");
        }
    }

    struct BrokenSessions;

    #[async_trait]
    impl SessionVerifier for BrokenSessions {
        async fn has_session(&self, _token: &str) -> Result<bool, AppError> {
            Err(AppError::Auth("connection refused".to_string()))
        }
    }

    fn row(published: bool, visibility: &str) -> ResumeSettingsRow {
        let mut row = settings_row("cv");
        row.publish_resume_page = published;
        row.visibility = visibility.to_string();
        row
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let store = MemorySettingsStore::default();
        let err = check_access(&store, &NeverAsked, "cv", None).await.unwrap_err();
        assert_eq!(err, PageError::NotFound);
        assert_eq!(err.to_string(), "Resume not found");
    }

    #[tokio::test]
    async fn test_unpublished_wins_regardless_of_visibility() {
        for visibility in ["public", "authenticated", "something-else"] {
            let store = MemorySettingsStore::with_rows([row(false, visibility)]);
            let err = check_access(&store, &NeverAsked, "cv", Some("good"))
                .await
                .unwrap_err();
            assert_eq!(err, PageError::Unpublished, "visibility {visibility}");
        }
    }

    #[tokio::test]
    async fn test_public_resume_skips_session_check() {
        let store = MemorySettingsStore::with_rows([row(true, "public")]);
        let settings = check_access(&store, &NeverAsked, "cv", None).await.unwrap();
        assert_eq!(settings.slug, "cv");
    }

    #[tokio::test]
    async fn test_authenticated_requires_session() {
        let store = MemorySettingsStore::with_rows([row(true, "authenticated")]);
        let sessions = StaticSessions("good");

        let err = check_access(&store, &sessions, "cv", None).await.unwrap_err();
        assert_eq!(err, PageError::LoginRequired);

        let err = check_access(&store, &sessions, "cv", Some("stale"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "You must be logged in to view this resume");

        assert!(check_access(&store, &sessions, "cv", Some("good")).await.is_ok());
    }

    #[tokio::test]
    async fn test_backend_failures_collapse_to_load_failed() {
        let err = check_access(&MemorySettingsStore::failing(), &NeverAsked, "cv", None)
            .await
            .unwrap_err();
        assert_eq!(err, PageError::LoadFailed);

        let store = MemorySettingsStore::with_rows([row(true, "authenticated")]);
        let err = check_access(&store, &BrokenSessions, "cv", Some("tok"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to load resume");
    }

    #[test]
    fn test_statuses() {
        assert_eq!(PageError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(PageError::Unpublished.status(), StatusCode::FORBIDDEN);
        assert_eq!(PageError::LoginRequired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(PageError::LoadFailed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
