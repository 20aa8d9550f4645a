//! Toolbar above the resume: owner name, presence badge, template switcher and
//! download controls. Each control only appears when the page settings allow it.

use maud::{html, Markup, PreEscaped};

use crate::preferences::DownloadFormat;
use crate::render::Style;

const CSS: &str = r#"
.resume-header { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1rem; padding: .75rem 1.5rem; background: #111827; color: #f9fafb; font: 14px/1.4 system-ui, sans-serif; }
.resume-header .owner { font-weight: 600; display: flex; gap: .6rem; align-items: center; }
.resume-header .badge { background: #10b981; color: #022c22; border-radius: 999px; padding: .05rem .6rem; font-size: 12px; }
.resume-header nav { display: flex; flex-wrap: wrap; gap: .3rem; }
.resume-header nav a { color: #d1d5db; text-decoration: none; padding: .2rem .55rem; border-radius: 6px; }
.resume-header nav a[aria-current] { background: #f9fafb; color: #111827; }
.resume-header form { display: flex; gap: .4rem; align-items: center; }
.resume-header select, .resume-header button { font: inherit; border-radius: 6px; border: 0; padding: .25rem .55rem; }
"#;

pub struct HeaderContext<'a> {
    pub owner_name: &'a str,
    /// `/r/{user}/{slug}`; switch links and the download form hang off it.
    pub base_path: &'a str,
    pub current: Style,
    pub presence_badge: Option<&'a str>,
    pub allow_switch: bool,
    pub downloads_enabled: bool,
    pub preferred_format: DownloadFormat,
}

pub fn render(ctx: &HeaderContext<'_>) -> Markup {
    html! {
        style { (PreEscaped(CSS)) }
        div class="resume-header" role="toolbar" {
            div class="owner" {
                span { (ctx.owner_name) }
                @if let Some(badge) = ctx.presence_badge {
                    span class="badge" data-control="presence" { (badge) }
                }
            }
            @if ctx.allow_switch {
                nav aria-label="Template" data-control="switcher" {
                    @for style in Style::ALL {
                        a href={ (ctx.base_path) "?style=" (style.slug()) }
                            aria-current=[(style == ctx.current).then_some("page")] {
                            (style.label())
                        }
                    }
                }
            }
            @if ctx.downloads_enabled {
                form method="get" action={ (ctx.base_path) "/download" } data-control="download" {
                    label for="download-format" { "Format" }
                    select id="download-format" name="format" {
                        @for format in DownloadFormat::ALL {
                            option value=(format.as_str()) selected[format == ctx.preferred_format] {
                                (format.as_str())
                            }
                        }
                    }
                    button type="submit" { "Download" }
                }
            }
        }
    }
}
