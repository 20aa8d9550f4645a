//! Date and social-icon helpers shared by every style.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use maud::{html, Markup, PreEscaped};

// ────────────────────────────────────────────────────────────────────────────
// Dates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFormat {
    /// "Mar 2020"
    Short,
    /// "March 2020"
    Long,
}

/// How a style renders a start/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStyle {
    pub separator: &'static str,
    /// Shown in place of an absent end date.
    pub present: &'static str,
    pub month: MonthFormat,
}

/// Renders an ISO date as month and year.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM`, and full timestamps (RFC 3339 or naive
/// `YYYY-MM-DDTHH:MM:SS`). Blank input yields an empty string; bare years and
/// anything unparseable are returned as-is.
pub fn format_month_year(iso: &str, month: MonthFormat) -> String {
    let iso = iso.trim();
    if iso.is_empty() {
        return String::new();
    }

    match parse_iso_date(iso) {
        Some(date) => {
            let pattern = match month {
                MonthFormat::Short => "%b %Y",
                MonthFormat::Long => "%B %Y",
            };
            date.format(pattern).to_string()
        }
        None => iso.to_string(),
    }
}

fn parse_iso_date(iso: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{iso}-01"), "%Y-%m-%d"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(iso).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// "start{sep}end", with the style's sentinel when `end` is absent or blank.
pub fn format_date_range(start: &str, end: Option<&str>, style: &DateStyle) -> String {
    let end = match end.map(str::trim).filter(|e| !e.is_empty()) {
        Some(e) => format_month_year(e, style.month),
        None => style.present.to_string(),
    };
    let start = format_month_year(start, style.month);
    if start.is_empty() {
        end
    } else {
        format!("{start}{}{end}", style.separator)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Social icons
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    GitLab,
    LinkedIn,
    Twitter,
    Facebook,
    Instagram,
    YouTube,
    Dribbble,
    Behance,
    Medium,
    StackOverflow,
    Mastodon,
    DevTo,
    CodePen,
    Website,
    ExternalLink,
}

/// Maps a profile network name to its icon. Unknown networks get `ExternalLink`.
pub fn network_icon(network: &str) -> Icon {
    match network.trim().to_lowercase().as_str() {
        "github" => Icon::GitHub,
        "gitlab" => Icon::GitLab,
        "linkedin" => Icon::LinkedIn,
        "twitter" | "x" => Icon::Twitter,
        "facebook" => Icon::Facebook,
        "instagram" => Icon::Instagram,
        "youtube" => Icon::YouTube,
        "dribbble" => Icon::Dribbble,
        "behance" => Icon::Behance,
        "medium" => Icon::Medium,
        "stackoverflow" | "stack overflow" => Icon::StackOverflow,
        "mastodon" => Icon::Mastodon,
        "dev.to" | "devto" => Icon::DevTo,
        "codepen" => Icon::CodePen,
        "website" | "homepage" | "blog" => Icon::Website,
        _ => Icon::ExternalLink,
    }
}

impl Icon {
    /// CSS class suffix, e.g. `icon--github`.
    pub fn name(self) -> &'static str {
        match self {
            Icon::GitHub => "github",
            Icon::GitLab => "gitlab",
            Icon::LinkedIn => "linkedin",
            Icon::Twitter => "twitter",
            Icon::Facebook => "facebook",
            Icon::Instagram => "instagram",
            Icon::YouTube => "youtube",
            Icon::Dribbble => "dribbble",
            Icon::Behance => "behance",
            Icon::Medium => "medium",
            Icon::StackOverflow => "stackoverflow",
            Icon::Mastodon => "mastodon",
            Icon::DevTo => "devto",
            Icon::CodePen => "codepen",
            Icon::Website => "website",
            Icon::ExternalLink => "external-link",
        }
    }

    /// 24x24 stroke path drawn inside the shared `<svg>` wrapper.
    fn path(self) -> &'static str {
        match self {
            Icon::GitHub => "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.9a3.4 3.4 0 0 0-.9-2.6c3.1-.3 6.4-1.5 6.4-7A5.4 5.4 0 0 0 20 4.8 5 5 0 0 0 19.9 1S18.7.7 16 2.5a13.4 13.4 0 0 0-7 0C6.3.7 5.1 1 5.1 1A5 5 0 0 0 5 4.8a5.4 5.4 0 0 0-1.5 3.7c0 5.5 3.3 6.7 6.4 7a3.4 3.4 0 0 0-.9 2.6V22",
            Icon::GitLab => "M22.6 13.5 12 21.2 1.4 13.5a.9.9 0 0 1-.3-1L2.3 8.8 4.7 1.4a.4.4 0 0 1 .8 0l2.4 7.4h8.2l2.4-7.4a.4.4 0 0 1 .8 0l2.4 7.4 1.2 3.7a.9.9 0 0 1-.3 1z",
            Icon::LinkedIn => "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z",
            Icon::Twitter => "M23 3a10.9 10.9 0 0 1-3.1 1.5 4.5 4.5 0 0 0-7.9 3v1A10.7 10.7 0 0 1 3 4s-4 9 5 13a11.6 11.6 0 0 1-7 2c9 5 20 0 20-11.5 0-.3 0-.6-.1-.8A7.7 7.7 0 0 0 23 3z",
            Icon::Facebook => "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
            Icon::Instagram => "M2 7a5 5 0 0 1 5-5h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5zm14 4.4A4 4 0 1 1 12.6 8 4 4 0 0 1 16 11.4zM17.5 6.5h0",
            Icon::YouTube => "M22.5 6.4a2.8 2.8 0 0 0-1.9-2C18.9 4 12 4 12 4s-6.9 0-8.6.5a2.8 2.8 0 0 0-1.9 2A29 29 0 0 0 1 11.8a29 29 0 0 0 .5 5.3A2.8 2.8 0 0 0 3.4 19c1.7.5 8.6.5 8.6.5s6.9 0 8.6-.5a2.8 2.8 0 0 0 1.9-2 29 29 0 0 0 .5-5.3 29 29 0 0 0-.5-5.3zM9.8 15V8.6l5.7 3.2z",
            Icon::Dribbble => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM8.6 2.8c3.8 5.2 6.8 11.4 8.1 17.3M19.1 5.1c-3.5 4.2-9.6 5.5-16.7 5.2M21.8 13.1c-6.1-1.4-12.5.7-16.6 7",
            Icon::Behance => "M1 5h6a3 3 0 0 1 0 6H1zm0 6h7a3 3 0 0 1 0 6H1zm14-5h6M14 14h8a4 4 0 1 0-1 3",
            Icon::Medium => "M4 6.5v11l-2 2.5h6l-2-2.5V9l6 11 5-12v10l-2 2h7l-2-2V6l2-2h-5l-4 10L7 4H2z",
            Icon::StackOverflow => "M18 20v-6h2v8H4v-8h2v6zM8 16h8v2H8zm.3-4 7.8 1.6-.4 2L7.9 14zm1.2-4.6 7.2 3.4-.8 1.8-7.2-3.3zm2.3-4.1 6.1 5.1-1.3 1.5-6.1-5.1zM15.8 1l4.7 6.4-1.6 1.2-4.7-6.4z",
            Icon::Mastodon => "M21 8c0-4.3-2.8-5.6-2.8-5.6C15.4 1 8.6 1 5.8 2.4 5.8 2.4 3 3.7 3 8c0 5.2-.3 11.6 4.7 12.9 1.8.5 3.3.6 4.6.5 2.2-.1 3.5-.8 3.5-.8l-.1-1.6s-1.6.5-3.3.4c-1.8-.1-3.6-.2-3.9-2.3a4 4 0 0 1 0-.6s1.7.4 3.9.5c1.3.1 2.6-.1 3.9-.2 2.5-.3 4.6-1.8 4.9-3.2.4-2.2.4-5.5.4-5.5zM17.4 13V8.6c0-1.8-.8-2.7-2.3-2.7-1.6 0-2.4 1-2.4 3.1v2.2h-1.5V9c0-2-.8-3.1-2.4-3.1-1.5 0-2.3.9-2.3 2.7V13",
            Icon::DevTo => "M3 4h18a1 1 0 0 1 1 1v14a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1V5a1 1 0 0 1 1-1zm3 4v8h2a2 2 0 0 0 2-2v-4a2 2 0 0 0-2-2zm8 0h-2v8h2m0-4h-2m6-4-1.5 8L15 8",
            Icon::CodePen => "M12 2 2 8.5v7L12 22l10-6.5v-7zm0 0v6.5m0 6.5V22M2 8.5l10 7 10-7M2 15.5l10-7 10 7",
            Icon::Website => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            Icon::ExternalLink => "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6M15 3h6v6M10 14 21 3",
        }
    }

    /// Inline SVG glyph, decorative only.
    pub fn glyph(self) -> Markup {
        html! {
            svg class={ "icon icon--" (self.name()) } width="16" height="16" viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
                stroke-linejoin="round" aria-hidden="true" {
                path d=(PreEscaped(self.path())) {}
            }
        }
    }
}
