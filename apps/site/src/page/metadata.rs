//! `<head>` metadata for a resume page: title, description, robots, canonical
//! URL, Open Graph and Twitter tags, and a JSON-LD `Person` block.

use maud::{html, Markup, PreEscaped};
use serde_json::{json, Map, Value};

use crate::models::resume::{non_blank, Resume};
use crate::models::settings::{ResumeSettingsRow, Visibility};

const DESCRIPTION_MAX_CHARS: usize = 160;
const DEFAULT_ROBOTS: &str = "index, follow";
const PRIVATE_ROBOTS: &str = "noindex, nofollow";

#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub robots: String,
    pub canonical_url: String,
    pub image: Option<String>,
    pub person: Value,
}

impl PageMetadata {
    pub fn build(settings: &ResumeSettingsRow, resume: &Resume, canonical_url: String) -> Self {
        let basics = &resume.basics;

        let title = non_blank(settings.meta_title.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| match non_blank(basics.label.as_deref()) {
                Some(label) => format!("{} — {label}", basics.name),
                None => basics.name.clone(),
            });

        let description = non_blank(settings.meta_description.as_deref())
            .map(str::to_string)
            .or_else(|| non_blank(basics.summary.as_deref()).map(truncate_description))
            .unwrap_or_default();

        let robots = if settings.visibility() == Visibility::Authenticated {
            PRIVATE_ROBOTS.to_string()
        } else {
            non_blank(settings.robots_directives.as_deref())
                .unwrap_or(DEFAULT_ROBOTS)
                .to_string()
        };

        PageMetadata {
            title,
            description,
            robots,
            image: basics.image.clone(),
            person: person_json_ld(resume),
            canonical_url,
        }
    }

    pub fn head(&self) -> Markup {
        html! {
            title { (self.title) }
            meta name="description" content=(self.description);
            meta name="robots" content=(self.robots);
            link rel="canonical" href=(self.canonical_url);
            meta property="og:type" content="profile";
            meta property="og:title" content=(self.title);
            meta property="og:description" content=(self.description);
            meta property="og:url" content=(self.canonical_url);
            @if let Some(image) = &self.image {
                meta property="og:image" content=(image);
            }
            meta name="twitter:card" content="summary";
            meta name="twitter:title" content=(self.title);
            meta name="twitter:description" content=(self.description);
            script type="application/ld+json" { (PreEscaped(script_safe_json(&self.person))) }
        }
    }
}

/// schema.org `Person` derived from resume basics and the current position.
pub fn person_json_ld(resume: &Resume) -> Value {
    let basics = &resume.basics;
    let mut person = Map::new();
    person.insert("@context".into(), json!("https://schema.org"));
    person.insert("@type".into(), json!("Person"));
    person.insert("name".into(), json!(basics.name));

    let optional = [
        ("jobTitle", &basics.label),
        ("email", &basics.email),
        ("telephone", &basics.phone),
        ("url", &basics.url),
        ("image", &basics.image),
        ("description", &basics.summary),
    ];
    for (key, value) in optional {
        if let Some(value) = non_blank(value.as_deref()) {
            person.insert(key.into(), json!(value));
        }
    }

    if let Some(location) = &basics.location {
        let mut address = Map::new();
        address.insert("@type".into(), json!("PostalAddress"));
        let parts = [
            ("streetAddress", &location.address),
            ("postalCode", &location.postal_code),
            ("addressLocality", &location.city),
            ("addressRegion", &location.region),
            ("addressCountry", &location.country_code),
        ];
        for (key, value) in parts {
            if let Some(value) = non_blank(value.as_deref()) {
                address.insert(key.into(), json!(value));
            }
        }
        person.insert("address".into(), Value::Object(address));
    }

    let same_as: Vec<&str> = basics
        .profiles
        .iter()
        .filter_map(|p| non_blank(p.url.as_deref()))
        .collect();
    if !same_as.is_empty() {
        person.insert("sameAs".into(), json!(same_as));
    }

    if let Some(current) = resume.work.iter().find(|w| w.is_current()) {
        person.insert(
            "worksFor".into(),
            json!({ "@type": "Organization", "name": current.name }),
        );
    }

    Value::Object(person)
}

fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_MAX_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(DESCRIPTION_MAX_CHARS - 1).collect();
    format!("{}…", cut.trim_end())
}

/// JSON inside `<script>` must not be able to close the element.
fn script_safe_json(value: &Value) -> String {
    serde_json::to_string(value)
        .unwrap_or_default()
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::fixtures::settings_row;
    use crate::models::sample::sample_resume;

    const CANONICAL: &str = "https://resumes.example.com/r/jordan/cv";

    fn build(settings: &ResumeSettingsRow) -> PageMetadata {
        PageMetadata::build(settings, &sample_resume(), CANONICAL.to_string())
    }

    #[test]
    fn test_defaults_come_from_resume() {
        let meta = build(&settings_row("cv"));
        assert_eq!(meta.title, "Jordan Rivera — Senior Software Engineer");
        assert!(meta.description.starts_with("Backend engineer"));
        assert!(meta.description.chars().count() <= DESCRIPTION_MAX_CHARS);
        assert_eq!(meta.robots, "index, follow");
    }

    #[test]
    fn test_settings_override_defaults() {
        let mut settings = settings_row("cv");
        settings.meta_title = Some("Hire Jordan".to_string());
        settings.meta_description = Some("Payments engineer".to_string());
        settings.robots_directives = Some("noindex".to_string());
        let meta = build(&settings);
        assert_eq!(meta.title, "Hire Jordan");
        assert_eq!(meta.description, "Payments engineer");
        assert_eq!(meta.robots, "noindex");
    }

    #[test]
    fn test_authenticated_pages_are_never_indexed() {
        let mut settings = settings_row("cv");
        settings.visibility = "authenticated".to_string();
        settings.robots_directives = Some("index, follow".to_string());
        assert_eq!(build(&settings).robots, "noindex, nofollow");
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        let text = "é".repeat(200);
        let out = truncate_description(&text);
        assert_eq!(out.chars().count(), DESCRIPTION_MAX_CHARS);
        assert!(out.ends_with('…'));
        assert_eq!(truncate_description("short"), "short");
    }

    #[test]
    fn test_person_json_ld() {
        let person = person_json_ld(&sample_resume());
        assert_eq!(person["@type"], "Person");
        assert_eq!(person["name"], "Jordan Rivera");
        assert_eq!(person["jobTitle"], "Senior Software Engineer");
        assert_eq!(person["address"]["addressLocality"], "San Francisco");
        assert_eq!(person["worksFor"]["name"], "Northwind Payments");
        assert_eq!(person["sameAs"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_person_json_ld_minimal() {
        let mut resume = Resume::default();
        resume.basics.name = "Sam".to_string();
        let person = person_json_ld(&resume);
        assert_eq!(person["name"], "Sam");
        assert!(person.get("address").is_none());
        assert!(person.get("sameAs").is_none());
        assert!(person.get("worksFor").is_none());
    }

    #[test]
    fn test_head_tags() {
        let html = build(&settings_row("cv")).head().into_string();
        assert!(html.contains("<link rel=\"canonical\" href=\"https://resumes.example.com/r/jordan/cv\">"));
        assert!(html.contains("property=\"og:image\""));
        assert!(html.contains("name=\"twitter:card\" content=\"summary\""));
        assert!(html.contains("application/ld+json"));
    }

    #[test]
    fn test_json_ld_cannot_close_script() {
        let mut resume = sample_resume();
        resume.basics.summary = Some("</script><script>alert(1)</script>".to_string());
        let meta = PageMetadata::build(&settings_row("cv"), &resume, CANONICAL.to_string());
        let html = meta.head().into_string();
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
