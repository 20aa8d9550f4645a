//! Axum route handlers for resume pages and mock downloads.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::settings::ResumeSettingsRow;
use crate::page::access::{check_access, PageError};
use crate::page::document;
use crate::page::download::mock_download;
use crate::page::metadata::PageMetadata;
use crate::page::session::access_token;
use crate::preferences::{download_format_cookie, style_cookie, DownloadFormat, Preferences};
use crate::render::header::{render as render_toolbar, HeaderContext};
use crate::render::Style;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub style: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub format: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Template selection
// ────────────────────────────────────────────────────────────────────────────

/// The style to render and whether the viewer's choice should be remembered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleChoice {
    pub style: Style,
    pub remember: bool,
}

/// Owner's template unless switching is allowed; then `?style=` beats the
/// remembered cookie, which beats the owner's template.
pub fn resolve_style(
    settings: &ResumeSettingsRow,
    requested: Option<&str>,
    prefs: &Preferences,
) -> StyleChoice {
    let configured = settings.template();
    if !settings.allow_users_switch_template {
        return StyleChoice {
            style: configured,
            remember: false,
        };
    }

    match requested.and_then(Style::parse) {
        Some(style) => StyleChoice {
            style,
            remember: true,
        },
        None => StyleChoice {
            style: prefs.style.unwrap_or(configured),
            remember: false,
        },
    }
}

pub fn page_path(user_id: &str, resume_slug: &str) -> String {
    format!("/r/{user_id}/{resume_slug}")
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /r/:user_id/:resume_slug
pub async fn handle_resume_page(
    State(state): State<AppState>,
    Path((user_id, resume_slug)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
    prefs: Preferences,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    let token = access_token(&headers);
    let settings = check_access(
        state.settings.as_ref(),
        state.sessions.as_ref(),
        &resume_slug,
        token.as_deref(),
    )
    .await?;

    let choice = resolve_style(&settings, query.style.as_deref(), &prefs);
    let base_path = page_path(&user_id, &resume_slug);
    let resume = state.resume.as_ref();

    let metadata = PageMetadata::build(
        &settings,
        resume,
        format!("{}{}", state.config.site_url, base_path),
    );
    let toolbar = render_toolbar(&HeaderContext {
        owner_name: &resume.basics.name,
        base_path: &base_path,
        current: choice.style,
        presence_badge: settings.presence_badge(),
        allow_switch: settings.allow_users_switch_template,
        downloads_enabled: settings.enable_resume_downloads,
        preferred_format: prefs.preferred_format(),
    });
    let page = document::render_ready(&metadata, toolbar, choice.style.render(resume));

    info!(
        user_id = %user_id,
        slug = %resume_slug,
        style = %choice.style,
        "Rendered resume page"
    );

    let cookies: Vec<_> = choice
        .remember
        .then(|| (header::SET_COOKIE, style_cookie(choice.style)))
        .into_iter()
        .collect();

    Ok((AppendHeaders(cookies), Html(page.into_string())).into_response())
}

/// GET /r/:user_id/:resume_slug/download?format=PDF|DOCX|JSON
///
/// Same gates as the page, then `enable_resume_downloads`. Without `format`
/// the remembered format (or PDF) is used.
pub async fn handle_download(
    State(state): State<AppState>,
    Path((user_id, resume_slug)): Path<(String, String)>,
    Query(query): Query<DownloadQuery>,
    prefs: Preferences,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let token = access_token(&headers);
    let settings = check_access(
        state.settings.as_ref(),
        state.sessions.as_ref(),
        &resume_slug,
        token.as_deref(),
    )
    .await?;

    if !settings.enable_resume_downloads {
        return Err(AppError::Forbidden(
            "Downloads are disabled for this resume".to_string(),
        ));
    }

    let format = match query.format.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
        Some(raw) => DownloadFormat::parse(raw).ok_or_else(|| {
            AppError::Validation(format!("Unsupported download format '{raw}'"))
        })?,
        None => prefs.preferred_format(),
    };

    let download = mock_download(&user_id, &resume_slug, Utc::now().date_naive(), format);
    info!(user_id = %user_id, slug = %resume_slug, file = %download.filename, "Served mock download");

    Ok((
        AppendHeaders([
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, download.content_disposition()),
            (header::SET_COOKIE, download_format_cookie(format)),
        ]),
        download.content,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::models::sample::sample_resume;
    use crate::models::settings::fixtures::settings_row;
    use crate::page::session::fake::StaticSessions;
    use crate::page::settings::memory::MemorySettingsStore;
    use crate::routes::build_router;

    fn test_config() -> Config {
        Config {
            database_url: "postgres://unused".to_string(),
            site_url: "https://resumes.example.com".to_string(),
            auth_url: None,
            auth_api_key: None,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }

    fn app(rows: Vec<ResumeSettingsRow>) -> Router {
        build_router(AppState {
            settings: Arc::new(MemorySettingsStore::with_rows(rows)),
            sessions: Arc::new(StaticSessions("valid-token")),
            resume: Arc::new(sample_resume()),
            config: test_config(),
        })
    }

    async fn get(app: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, HeaderMap, String) {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    fn switchable(slug: &str) -> ResumeSettingsRow {
        let mut row = settings_row(slug);
        row.allow_users_switch_template = true;
        row.resume_page_template = Some("enterprise".to_string());
        row
    }

    #[test]
    fn test_resolve_style_locked_template_ignores_viewer() {
        let mut row = settings_row("cv");
        row.resume_page_template = Some("namaste".to_string());
        let prefs = Preferences {
            style: Some(Style::Zine),
            download_format: None,
        };
        let choice = resolve_style(&row, Some("enterprise"), &prefs);
        assert_eq!(choice, StyleChoice { style: Style::Namaste, remember: false });
    }

    #[test]
    fn test_resolve_style_precedence() {
        let row = switchable("cv");
        let remembered = Preferences {
            style: Some(Style::Zine),
            download_format: None,
        };

        let choice = resolve_style(&row, Some("traditional"), &remembered);
        assert_eq!(choice, StyleChoice { style: Style::Traditional, remember: true });

        let choice = resolve_style(&row, Some("bogus"), &remembered);
        assert_eq!(choice, StyleChoice { style: Style::Zine, remember: false });

        let choice = resolve_style(&row, None, &Preferences::default());
        assert_eq!(choice, StyleChoice { style: Style::Enterprise, remember: false });
    }

    #[tokio::test]
    async fn test_page_renders_configured_template() {
        let (status, headers, body) = get(app(vec![settings_row("cv")]), "/r/jordan/cv", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("resume--standard"));
        assert!(body.contains("<link rel=\"canonical\" href=\"https://resumes.example.com/r/jordan/cv\">"));
        assert!(!body.contains("data-control=\"switcher\""));
        assert!(headers.get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_missing_resume_is_404_html() {
        let (status, _, body) = get(app(vec![]), "/r/jordan/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Resume not found"));
    }

    #[tokio::test]
    async fn test_unpublished_resume() {
        let mut row = settings_row("cv");
        row.publish_resume_page = false;
        row.visibility = "authenticated".to_string();
        let (status, _, body) = get(app(vec![row]), "/r/jordan/cv", Some("access_token=valid-token")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.contains("This resume is not currently published"));
    }

    #[tokio::test]
    async fn test_authenticated_resume_needs_session() {
        let mut row = settings_row("cv");
        row.visibility = "authenticated".to_string();

        let (status, _, body) = get(app(vec![row.clone()]), "/r/jordan/cv", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("You must be logged in to view this resume"));

        let (status, _, body) =
            get(app(vec![row]), "/r/jordan/cv", Some("access_token=valid-token")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("noindex, nofollow"));
    }

    #[tokio::test]
    async fn test_store_failure_renders_generic_error() {
        let app = build_router(AppState {
            settings: Arc::new(MemorySettingsStore::failing()),
            sessions: Arc::new(StaticSessions("valid-token")),
            resume: Arc::new(sample_resume()),
            config: test_config(),
        });
        let (status, _, body) = get(app, "/r/jordan/cv", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Failed to load resume"));
    }

    #[tokio::test]
    async fn test_style_switch_sets_cookie() {
        let (status, headers, body) =
            get(app(vec![switchable("cv")]), "/r/jordan/cv?style=neo-brutalist", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("resume--neo-brutalist"));
        let cookie = headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("resumeStyle=neo-brutalist;"));
    }

    #[tokio::test]
    async fn test_remembered_style_restored() {
        let (_, headers, body) =
            get(app(vec![switchable("cv")]), "/r/jordan/cv", Some("resumeStyle=namaste")).await;
        assert!(body.contains("resume--namaste"));
        assert!(headers.get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_download_disabled() {
        let (status, _, body) = get(app(vec![settings_row("cv")]), "/r/jordan/cv/download?format=PDF", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.contains("Downloads are disabled"));
    }

    #[tokio::test]
    async fn test_download_mock_artifact() {
        let mut row = settings_row("cv");
        row.enable_resume_downloads = true;

        let (status, headers, body) =
            get(app(vec![row]), "/r/jordan/cv/download?format=docx", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Mock DOCX content for jordan/cv");

        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        let disposition = headers
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(
            disposition,
            format!("attachment; filename=\"jordan-cv-{today}.docx\"")
        );
        let cookie = headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("preferredDownloadFormat=DOCX;"));
    }

    #[tokio::test]
    async fn test_download_uses_remembered_format() {
        let mut row = settings_row("cv");
        row.enable_resume_downloads = true;
        let (status, _, body) = get(
            app(vec![row]),
            "/r/jordan/cv/download",
            Some("preferredDownloadFormat=JSON"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Mock JSON content for jordan/cv");
    }

    #[tokio::test]
    async fn test_download_rejects_unknown_format() {
        let mut row = settings_row("cv");
        row.enable_resume_downloads = true;
        let (status, _, _) = get(app(vec![row]), "/r/jordan/cv/download?format=odt", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_download_respects_gates() {
        let (status, _, body) = get(app(vec![]), "/r/jordan/cv/download", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Resume not found"));
    }

    #[tokio::test]
    async fn test_header_controls_follow_settings() {
        let mut row = switchable("cv");
        row.enable_resume_downloads = true;
        row.presence_badge = Some("Open to work".to_string());
        let (_, _, body) = get(
            app(vec![row]),
            "/r/jordan/cv",
            Some("preferredDownloadFormat=JSON"),
        )
        .await;
        assert!(body.contains("data-control=\"switcher\""));
        assert!(body.contains("<option value=\"JSON\" selected>"));
        assert!(body.contains("Open to work"));
    }
}
