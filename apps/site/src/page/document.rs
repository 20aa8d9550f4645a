//! Full HTML documents for the two terminal page states.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::page::access::PageError;
use crate::page::metadata::PageMetadata;

const BASE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; background: #f3f4f6; }
.page-error { max-width: 480px; margin: 20vh auto 0; padding: 2rem; text-align: center; font: 16px/1.5 system-ui, sans-serif; color: #374151; background: #fff; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.page-error h1 { font-size: 1.25rem; margin: 0 0 .5rem; }
@media print { .resume-header { display: none; } body { background: #fff; } }
"#;

/// The ready page: metadata in `<head>`, header toolbar then the styled resume.
pub fn render_ready(metadata: &PageMetadata, header: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (metadata.head())
                style { (PreEscaped(BASE_CSS)) }
            }
            body {
                (header)
                main { (body) }
            }
        }
    }
}

pub fn render_error(error: PageError) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="robots" content="noindex";
                title { (error.to_string()) }
                style { (PreEscaped(BASE_CSS)) }
            }
            body {
                div class="page-error" role="alert" {
                    h1 { (error.to_string()) }
                    @if error == PageError::LoginRequired {
                        p { "Sign in and reload this page to continue." }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_document_shows_message() {
        for error in [
            PageError::NotFound,
            PageError::Unpublished,
            PageError::LoginRequired,
            PageError::LoadFailed,
        ] {
            let html = render_error(error).into_string();
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains(&format!("<h1>{error}</h1>")));
        }
    }
}
