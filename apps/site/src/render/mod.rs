// Resume rendering: one shared formatting module, six layouts selected by `Style`.
// Every renderer is a pure function from `&Resume` to `Markup`.

pub mod format;
pub mod header;
pub mod styles;

use maud::Markup;
use serde::{Deserialize, Serialize};

use crate::models::resume::Resume;
use format::{DateStyle, MonthFormat};

/// The visual template a resume page is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    Standard,
    Traditional,
    NeoBrutalist,
    Namaste,
    Zine,
    Enterprise,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Standard,
        Style::Traditional,
        Style::NeoBrutalist,
        Style::Namaste,
        Style::Zine,
        Style::Enterprise,
    ];

    /// Identifier used in settings rows, query strings and cookies.
    pub fn slug(self) -> &'static str {
        match self {
            Style::Standard => "standard",
            Style::Traditional => "traditional",
            Style::NeoBrutalist => "neo-brutalist",
            Style::Namaste => "namaste",
            Style::Zine => "zine",
            Style::Enterprise => "enterprise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::Standard => "Standard",
            Style::Traditional => "Traditional",
            Style::NeoBrutalist => "Neo-Brutalist",
            Style::Namaste => "Namaste",
            Style::Zine => "Zine",
            Style::Enterprise => "Enterprise",
        }
    }

    /// Case-insensitive; `None` for anything outside the six identifiers.
    pub fn parse(raw: &str) -> Option<Style> {
        let raw = raw.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.slug().eq_ignore_ascii_case(raw))
    }

    pub fn date_style(self) -> DateStyle {
        match self {
            Style::Standard => DateStyle {
                separator: " - ",
                present: "Present",
                month: MonthFormat::Short,
            },
            Style::Traditional => DateStyle {
                separator: " – ",
                present: "Present",
                month: MonthFormat::Long,
            },
            Style::NeoBrutalist => DateStyle {
                separator: " → ",
                present: "NOW",
                month: MonthFormat::Short,
            },
            Style::Namaste => DateStyle {
                separator: " · ",
                present: "Present",
                month: MonthFormat::Short,
            },
            Style::Zine => DateStyle {
                separator: " / ",
                present: "NOW",
                month: MonthFormat::Short,
            },
            Style::Enterprise => DateStyle {
                separator: " — ",
                present: "Present",
                month: MonthFormat::Short,
            },
        }
    }

    /// Date range in this style's notation.
    pub fn dates(self, start: &str, end: Option<&str>) -> String {
        format::format_date_range(start, end, &self.date_style())
    }

    /// Single date (awards, certificates, publications) in this style's notation.
    pub fn date(self, iso: &str) -> String {
        format::format_month_year(iso, self.date_style().month)
    }

    pub fn render(self, resume: &Resume) -> Markup {
        match self {
            Style::Standard => styles::standard::render(resume),
            Style::Traditional => styles::traditional::render(resume),
            Style::NeoBrutalist => styles::neo_brutalist::render(resume),
            Style::Namaste => styles::namaste::render(resume),
            Style::Zine => styles::zine::render(resume),
            Style::Enterprise => styles::enterprise::render(resume),
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Basics, Work};
    use crate::models::sample::sample_resume;

    const OPTIONAL_SECTIONS: [&str; 12] = [
        "summary",
        "work",
        "volunteer",
        "education",
        "awards",
        "certificates",
        "publications",
        "skills",
        "languages",
        "interests",
        "references",
        "projects",
    ];

    fn bare_resume() -> Resume {
        Resume {
            basics: Basics {
                name: "Sam Doe".to_string(),
                summary: Some("  ".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_round_trips_slugs() {
        for style in Style::ALL {
            assert_eq!(Style::parse(style.slug()), Some(style));
        }
        assert_eq!(Style::parse("NEO-BRUTALIST"), Some(Style::NeoBrutalist));
        assert_eq!(Style::parse("brutalist"), None);
    }

    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&Style::NeoBrutalist).unwrap();
        assert_eq!(json, "\"neo-brutalist\"");
    }

    #[test]
    fn test_every_style_omits_empty_sections() {
        let resume = bare_resume();
        for style in Style::ALL {
            let html = style.render(&resume).into_string();
            assert!(html.contains("Sam Doe"), "{style} lost the name");
            assert!(
                html.contains(&format!("resume--{}", style.slug())),
                "{style} missing root class"
            );
            for section in OPTIONAL_SECTIONS {
                assert!(
                    !html.contains(&format!("data-section=\"{section}\"")),
                    "{style} rendered empty section {section}"
                );
            }
        }
    }

    #[test]
    fn test_every_style_renders_full_sample() {
        let resume = sample_resume();
        for style in Style::ALL {
            let html = style.render(&resume).into_string();
            for section in ["work", "education", "skills", "projects"] {
                assert!(
                    html.contains(&format!("data-section=\"{section}\"")),
                    "{style} dropped section {section}"
                );
            }
            assert!(html.contains("icon--github"), "{style} missing profile icon");
        }
    }

    #[test]
    fn test_open_ended_work_uses_style_sentinel() {
        let mut resume = bare_resume();
        resume.work.push(Work {
            name: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-03-01".to_string(),
            end_date: Some(String::new()),
            ..Default::default()
        });

        let enterprise = Style::Enterprise.render(&resume).into_string();
        assert!(enterprise.contains("Mar 2020 — Present"));

        let brutalist = Style::NeoBrutalist.render(&resume).into_string();
        assert!(brutalist.contains("Mar 2020 → NOW"));
    }

    #[test]
    fn test_closed_work_renders_end_month() {
        for style in Style::ALL {
            assert!(style
                .dates("2016-06-01", Some("2020-02-28"))
                .ends_with("2020"));
            assert!(!style.dates("2016-06-01", Some("2020-02-28")).contains(style.date_style().present));
        }
    }

    #[test]
    fn test_user_content_is_escaped() {
        let mut resume = bare_resume();
        resume.basics.name = "<script>alert(1)</script>".to_string();
        for style in Style::ALL {
            let html = style.render(&resume).into_string();
            assert!(!html.contains("<script>alert"), "{style} did not escape");
        }
    }
}
