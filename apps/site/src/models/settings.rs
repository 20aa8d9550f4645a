use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::render::Style;

/// Per-resume page settings, one row of the `resumes` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeSettingsRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub slug: String,
    pub publish_resume_page: bool,
    pub presence_badge: Option<String>,
    pub enable_resume_downloads: bool,
    pub resume_page_template: Option<String>,
    pub allow_users_switch_template: bool,
    pub visibility: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub robots_directives: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Authenticated,
}

impl Visibility {
    /// Only the literal `authenticated` restricts access; anything else is public.
    pub fn parse(raw: &str) -> Self {
        if raw == "authenticated" {
            Visibility::Authenticated
        } else {
            Visibility::Public
        }
    }
}

impl ResumeSettingsRow {
    pub fn visibility(&self) -> Visibility {
        Visibility::parse(&self.visibility)
    }

    /// The owner's configured template, `standard` when unset or unknown.
    pub fn template(&self) -> Style {
        self.resume_page_template
            .as_deref()
            .and_then(Style::parse)
            .unwrap_or_default()
    }

    /// Badge text to show next to the name, if any.
    pub fn presence_badge(&self) -> Option<&str> {
        self.presence_badge
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty() && !b.eq_ignore_ascii_case("none"))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A published, public row with every toggle off.
    pub fn settings_row(slug: &str) -> ResumeSettingsRow {
        ResumeSettingsRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            slug: slug.to_string(),
            publish_resume_page: true,
            presence_badge: None,
            enable_resume_downloads: false,
            resume_page_template: Some("standard".to_string()),
            allow_users_switch_template: false,
            visibility: "public".to_string(),
            meta_title: None,
            meta_description: None,
            robots_directives: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::settings_row;
    use super::*;

    #[test]
    fn test_visibility_parse() {
        assert_eq!(Visibility::parse("authenticated"), Visibility::Authenticated);
        assert_eq!(Visibility::parse("public"), Visibility::Public);
        assert_eq!(Visibility::parse("Authenticated"), Visibility::Public);
        assert_eq!(Visibility::parse(""), Visibility::Public);
    }

    #[test]
    fn test_template_falls_back_to_standard() {
        let mut row = settings_row("cv");
        row.resume_page_template = Some("zine".to_string());
        assert_eq!(row.template(), Style::Zine);
        row.resume_page_template = Some("baroque".to_string());
        assert_eq!(row.template(), Style::Standard);
        row.resume_page_template = None;
        assert_eq!(row.template(), Style::Standard);
    }

    #[test]
    fn test_presence_badge_hides_none() {
        let mut row = settings_row("cv");
        assert_eq!(row.presence_badge(), None);
        row.presence_badge = Some("none".to_string());
        assert_eq!(row.presence_badge(), None);
        row.presence_badge = Some("Open to work".to_string());
        assert_eq!(row.presence_badge(), Some("Open to work"));
    }
}
