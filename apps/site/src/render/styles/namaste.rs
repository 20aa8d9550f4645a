//! Namaste: calm two-column layout, soft earth palette, sidebar for skills and languages.

use maud::{html, Markup, PreEscaped};

use crate::models::resume::{non_blank, Resume};
use crate::render::format::network_icon;
use crate::render::Style;

const STYLE: Style = Style::Namaste;

const CSS: &str = r#"
.resume--namaste { max-width: 960px; margin: 0 auto; display: grid; grid-template-columns: 280px 1fr; font-family: 'Nunito', 'Segoe UI', sans-serif; color: #3d3a35; background: #faf7f2; border-radius: 18px; overflow: hidden; }
.resume--namaste aside { background: #e9dfd1; padding: 2rem 1.5rem; }
.resume--namaste main { padding: 2rem 2.2rem; }
.resume--namaste .avatar { width: 112px; height: 112px; border-radius: 50%; object-fit: cover; border: 4px solid #faf7f2; }
.resume--namaste h1 { font-weight: 300; font-size: 1.9rem; margin: .8rem 0 .2rem; }
.resume--namaste .label { color: #9a6f4a; }
.resume--namaste aside ul { list-style: none; padding: 0; }
.resume--namaste aside li { margin: .35rem 0; display: flex; gap: .4rem; align-items: center; }
.resume--namaste aside a { color: inherit; }
.resume--namaste h2 { font-weight: 400; color: #9a6f4a; letter-spacing: .12em; text-transform: lowercase; font-size: 1.05rem; }
.resume--namaste h2::before { content: "✿ "; }
.resume--namaste .item { padding-left: 1rem; border-left: 2px solid #e9dfd1; margin-bottom: 1.2rem; }
.resume--namaste .when { font-size: .85rem; color: #8c8378; }
"#;

pub fn render(resume: &Resume) -> Markup {
    let b = &resume.basics;
    html! {
        article class="resume resume--namaste" {
            style { (PreEscaped(CSS)) }
            aside {
                @if let Some(image) = &b.image { img class="avatar" src=(image) alt=(b.name); }
                h1 { (b.name) }
                @if let Some(label) = &b.label { div class="label" { (label) } }
                ul {
                    @if let Some(location) = &b.location { li { (location.display()) } }
                    @if let Some(email) = &b.email { li { a href={ "mailto:" (email) } { (email) } } }
                    @if let Some(phone) = &b.phone { li { (phone) } }
                    @if let Some(url) = &b.url { li { a href=(url) { (url) } } }
                    @for profile in &b.profiles {
                        li {
                            (network_icon(&profile.network).glyph())
                            a href=[profile.url.as_deref()] rel="me noopener" {
                                (profile.username.as_deref().unwrap_or(&profile.network))
                            }
                        }
                    }
                }
                @if !resume.skills.is_empty() {
                    section data-section="skills" {
                        h2 { "skills" }
                        @for skill in &resume.skills {
                            p { strong { (skill.name) } br; (skill.keywords.join(" · ")) }
                        }
                    }
                }
                @if !resume.languages.is_empty() {
                    section data-section="languages" {
                        h2 { "languages" }
                        ul { @for l in &resume.languages {
                            li { (l.language) @if let Some(f) = &l.fluency { " · " (f) } }
                        } }
                    }
                }
                @if !resume.interests.is_empty() {
                    section data-section="interests" {
                        h2 { "interests" }
                        ul { @for i in &resume.interests { li { (i.name) } } }
                    }
                }
            }
            main {
                @if let Some(summary) = non_blank(b.summary.as_deref()) {
                    section data-section="summary" { h2 { "about" } p { (summary) } }
                }
                @if !resume.work.is_empty() {
                    section data-section="work" {
                        h2 { "journey" }
                        @for job in &resume.work {
                            div class="item" {
                                div class="when" { (STYLE.dates(&job.start_date, job.end_date.as_deref())) }
                                h3 { (job.position) }
                                div { (job.name) @if let Some(loc) = &job.location { " · " (loc) } }
                                @if let Some(summary) = &job.summary { p { (summary) } }
                                @if !job.highlights.is_empty() {
                                    ul { @for h in &job.highlights { li { (h) } } }
                                }
                            }
                        }
                    }
                }
                @if !resume.projects.is_empty() {
                    section data-section="projects" {
                        h2 { "creations" }
                        @for project in &resume.projects {
                            div class="item" {
                                @if let Some(start) = &project.start_date {
                                    div class="when" { (STYLE.dates(start, project.end_date.as_deref())) }
                                }
                                h3 {
                                    @if let Some(url) = &project.url { a href=(url) { (project.name) } }
                                    @else { (project.name) }
                                }
                                @if let Some(desc) = &project.description { p { (desc) } }
                            }
                        }
                    }
                }
                @if !resume.education.is_empty() {
                    section data-section="education" {
                        h2 { "learning" }
                        @for edu in &resume.education {
                            div class="item" {
                                div class="when" { (STYLE.dates(&edu.start_date, edu.end_date.as_deref())) }
                                h3 { (edu.study_type) ", " (edu.area) }
                                div { (edu.institution) }
                            }
                        }
                    }
                }
                @if !resume.volunteer.is_empty() {
                    section data-section="volunteer" {
                        h2 { "giving back" }
                        @for v in &resume.volunteer {
                            div class="item" {
                                div class="when" { (STYLE.dates(&v.start_date, v.end_date.as_deref())) }
                                h3 { (v.position) }
                                div { (v.organization) }
                                @if let Some(summary) = &v.summary { p { (summary) } }
                            }
                        }
                    }
                }
                @if !resume.awards.is_empty() {
                    section data-section="awards" {
                        h2 { "recognition" }
                        @for a in &resume.awards {
                            div class="item" {
                                div class="when" { (STYLE.date(&a.date)) }
                                div { strong { (a.title) } " · " (a.awarder) }
                            }
                        }
                    }
                }
                @if !resume.certificates.is_empty() {
                    section data-section="certificates" {
                        h2 { "certificates" }
                        @for c in &resume.certificates {
                            div class="item" {
                                div class="when" { (STYLE.date(&c.date)) }
                                div { (c.name) " · " (c.issuer) }
                            }
                        }
                    }
                }
                @if !resume.publications.is_empty() {
                    section data-section="publications" {
                        h2 { "writing" }
                        @for publication in &resume.publications {
                            div class="item" {
                                div class="when" { (STYLE.date(&publication.release_date)) }
                                div { em { (publication.name) } " · " (publication.publisher) }
                            }
                        }
                    }
                }
                @if !resume.references.is_empty() {
                    section data-section="references" {
                        h2 { "kind words" }
                        @for r in &resume.references {
                            blockquote class="item" { (r.reference) br; small { (r.name) } }
                        }
                    }
                }
            }
        }
    }
}
