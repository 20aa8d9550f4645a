use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::settings::ResumeSettingsRow;

/// Source of per-resume page settings.
///
/// Carried in `AppState` as `Arc<dyn SettingsStore>` so handlers never touch the
/// pool directly.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ResumeSettingsRow>, AppError>;
}

/// Reads settings from the `resumes` table.
pub struct PgSettingsStore {
    pool: PgPool,
}

impl PgSettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ResumeSettingsRow>, AppError> {
        let row: Option<ResumeSettingsRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, slug, publish_resume_page, presence_badge,
                   enable_resume_downloads, resume_page_template,
                   allow_users_switch_template, visibility,
                   meta_title, meta_description, robots_directives
            FROM resumes
            WHERE slug = $1
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        debug!(slug, found = row.is_some(), "Loaded resume settings");
        Ok(row)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::collections::HashMap;

    use super::*;

    /// In-memory store for handler tests. `failing()` simulates a broken backend.
    #[derive(Default)]
    pub struct MemorySettingsStore {
        rows: HashMap<String, ResumeSettingsRow>,
        fail: bool,
    }

    impl MemorySettingsStore {
        pub fn with_rows(rows: impl IntoIterator<Item = ResumeSettingsRow>) -> Self {
            Self {
                rows: rows.into_iter().map(|r| (r.slug.clone(), r)).collect(),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                rows: HashMap::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl SettingsStore for MemorySettingsStore {
        async fn find_by_slug(&self, slug: &str) -> Result<Option<ResumeSettingsRow>, AppError> {
            if self.fail {
                return Err(AppError::Internal(anyhow::anyhow!("settings store offline")));
            }
            Ok(self.rows.get(slug).cloned())
        }
    }
}
