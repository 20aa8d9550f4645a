//! Viewer preferences persisted in the browser as cookies.
//!
//! Parsed once per request into a `Preferences` value and handed to whatever
//! needs it; nothing else reads the cookie header for these keys.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use serde::{Deserialize, Serialize};

use crate::render::Style;

pub const STYLE_COOKIE: &str = "resumeStyle";
pub const DOWNLOAD_FORMAT_COOKIE: &str = "preferredDownloadFormat";

const COOKIE_MAX_AGE_SECS: u32 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DownloadFormat {
    #[default]
    Pdf,
    Docx,
    Json,
}

impl DownloadFormat {
    pub const ALL: [DownloadFormat; 3] = [
        DownloadFormat::Pdf,
        DownloadFormat::Docx,
        DownloadFormat::Json,
    ];

    /// Stored and displayed form: `PDF`, `DOCX`, `JSON`.
    pub fn as_str(self) -> &'static str {
        match self {
            DownloadFormat::Pdf => "PDF",
            DownloadFormat::Docx => "DOCX",
            DownloadFormat::Json => "JSON",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DownloadFormat::Pdf => "pdf",
            DownloadFormat::Docx => "docx",
            DownloadFormat::Json => "json",
        }
    }

    /// Accepts either the stored form or the extension, any case.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        DownloadFormat::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(raw))
    }
}

/// The viewer's remembered choices. Absent or unrecognised cookies read as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub style: Option<Style>,
    pub download_format: Option<DownloadFormat>,
}

impl Preferences {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Preferences {
            style: cookie_value(headers, STYLE_COOKIE).and_then(|v| Style::parse(&v)),
            download_format: cookie_value(headers, DOWNLOAD_FORMAT_COOKIE)
                .and_then(|v| DownloadFormat::parse(&v)),
        }
    }

    pub fn preferred_format(&self) -> DownloadFormat {
        self.download_format.unwrap_or_default()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Preferences
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Preferences::from_headers(&parts.headers))
    }
}

/// `Set-Cookie` value remembering a template choice.
pub fn style_cookie(style: Style) -> String {
    persistent_cookie(STYLE_COOKIE, style.slug())
}

/// `Set-Cookie` value remembering a download format.
pub fn download_format_cookie(format: DownloadFormat) -> String {
    persistent_cookie(DOWNLOAD_FORMAT_COOKIE, format.as_str())
}

fn persistent_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax")
}

/// Last value of cookie `name` across every `Cookie` header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    /// What a browser sends back after receiving `set_cookie`.
    fn echo(set_cookie: &str) -> HeaderMap {
        let pair = set_cookie.split(';').next().unwrap();
        headers_with_cookie(pair)
    }

    #[test]
    fn test_empty_headers_have_no_preferences() {
        let prefs = Preferences::from_headers(&HeaderMap::new());
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.preferred_format(), DownloadFormat::Pdf);
    }

    #[test]
    fn test_reads_both_keys() {
        let headers =
            headers_with_cookie("session=abc; resumeStyle=zine; preferredDownloadFormat=DOCX");
        let prefs = Preferences::from_headers(&headers);
        assert_eq!(prefs.style, Some(Style::Zine));
        assert_eq!(prefs.download_format, Some(DownloadFormat::Docx));
    }

    #[test]
    fn test_unknown_values_are_ignored() {
        let headers = headers_with_cookie("resumeStyle=gothic; preferredDownloadFormat=ODT");
        assert_eq!(Preferences::from_headers(&headers), Preferences::default());
    }

    #[test]
    fn test_style_round_trip() {
        for style in Style::ALL {
            let prefs = Preferences::from_headers(&echo(&style_cookie(style)));
            assert_eq!(prefs.style, Some(style));
        }
    }

    #[test]
    fn test_download_format_round_trip() {
        for format in DownloadFormat::ALL {
            let prefs = Preferences::from_headers(&echo(&download_format_cookie(format)));
            assert_eq!(prefs.download_format, Some(format));
        }
    }

    #[test]
    fn test_last_write_wins() {
        let mut headers = headers_with_cookie("resumeStyle=zine");
        headers.append(header::COOKIE, HeaderValue::from_static("resumeStyle=enterprise"));
        assert_eq!(Preferences::from_headers(&headers).style, Some(Style::Enterprise));
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = download_format_cookie(DownloadFormat::Json);
        assert!(cookie.starts_with("preferredDownloadFormat=JSON;"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn test_format_parse_accepts_extension_case() {
        assert_eq!(DownloadFormat::parse("pdf"), Some(DownloadFormat::Pdf));
        assert_eq!(DownloadFormat::parse(" Docx "), Some(DownloadFormat::Docx));
        assert_eq!(DownloadFormat::parse("txt"), None);
    }
}
