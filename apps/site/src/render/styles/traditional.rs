//! Traditional: serif typography, centered letterhead, long month names.

use maud::{html, Markup, PreEscaped};

use crate::models::resume::{non_blank, Resume};
use crate::render::format::network_icon;
use crate::render::Style;

const STYLE: Style = Style::Traditional;

const CSS: &str = r#"
.resume--traditional { max-width: 780px; margin: 0 auto; padding: 3rem 2.5rem; font-family: Georgia, 'Times New Roman', serif; color: #222; background: #fffdf8; }
.resume--traditional header { text-align: center; border-bottom: 2px double #444; padding-bottom: 1rem; }
.resume--traditional h1 { font-variant: small-caps; letter-spacing: .08em; font-size: 2.4rem; margin: 0; }
.resume--traditional .label { font-style: italic; margin: .3rem 0; }
.resume--traditional .contact { font-size: .9rem; }
.resume--traditional .contact > * + *::before { content: " | "; color: #999; }
.resume--traditional .contact a { color: inherit; }
.resume--traditional h2 { font-variant: small-caps; font-size: 1.25rem; border-bottom: 1px solid #aaa; margin-top: 1.8rem; }
.resume--traditional .row { display: grid; grid-template-columns: 11rem 1fr; gap: 1rem; margin-bottom: .9rem; }
.resume--traditional .when { font-style: italic; color: #555; }
"#;

pub fn render(resume: &Resume) -> Markup {
    let b = &resume.basics;
    html! {
        article class="resume resume--traditional" {
            style { (PreEscaped(CSS)) }
            header {
                h1 { (b.name) }
                @if let Some(label) = &b.label { p class="label" { (label) } }
                p class="contact" {
                    @if let Some(location) = &b.location { span { (location.display()) } }
                    @if let Some(phone) = &b.phone { span { (phone) } }
                    @if let Some(email) = &b.email { a href={ "mailto:" (email) } { (email) } }
                    @if let Some(url) = &b.url { a href=(url) { (url) } }
                }
                @if !b.profiles.is_empty() {
                    p class="contact" {
                        @for profile in &b.profiles {
                            a href=[profile.url.as_deref()] rel="me noopener" {
                                (network_icon(&profile.network).glyph()) " " (profile.network)
                            }
                        }
                    }
                }
            }
            @if let Some(summary) = non_blank(b.summary.as_deref()) {
                section data-section="summary" { h2 { "Profile" } p { (summary) } }
            }
            @if !resume.work.is_empty() {
                section data-section="work" {
                    h2 { "Professional Experience" }
                    @for job in &resume.work {
                        div class="row" {
                            div class="when" { (STYLE.dates(&job.start_date, job.end_date.as_deref())) }
                            div {
                                strong { (job.name) }
                                @if let Some(loc) = &job.location { ", " (loc) }
                                br;
                                em { (job.position) }
                                @if let Some(summary) = &job.summary { p { (summary) } }
                                @if !job.highlights.is_empty() {
                                    ul { @for h in &job.highlights { li { (h) } } }
                                }
                            }
                        }
                    }
                }
            }
            @if !resume.education.is_empty() {
                section data-section="education" {
                    h2 { "Education" }
                    @for edu in &resume.education {
                        div class="row" {
                            div class="when" { (STYLE.dates(&edu.start_date, edu.end_date.as_deref())) }
                            div {
                                strong { (edu.institution) } br;
                                (edu.study_type) ", " (edu.area)
                                @if !edu.courses.is_empty() {
                                    p { em { "Coursework: " } (edu.courses.join(", ")) }
                                }
                            }
                        }
                    }
                }
            }
            @if !resume.publications.is_empty() {
                section data-section="publications" {
                    h2 { "Publications" }
                    @for publication in &resume.publications {
                        div class="row" {
                            div class="when" { (STYLE.date(&publication.release_date)) }
                            div {
                                "“" (publication.name) "”, " em { (publication.publisher) }
                                @if let Some(summary) = &publication.summary { p { (summary) } }
                            }
                        }
                    }
                }
            }
            @if !resume.awards.is_empty() {
                section data-section="awards" {
                    h2 { "Honours & Awards" }
                    @for a in &resume.awards {
                        div class="row" {
                            div class="when" { (STYLE.date(&a.date)) }
                            div { strong { (a.title) } ", " (a.awarder) }
                        }
                    }
                }
            }
            @if !resume.certificates.is_empty() {
                section data-section="certificates" {
                    h2 { "Certifications" }
                    @for c in &resume.certificates {
                        div class="row" {
                            div class="when" { (STYLE.date(&c.date)) }
                            div { (c.name) ", " em { (c.issuer) } }
                        }
                    }
                }
            }
            @if !resume.projects.is_empty() {
                section data-section="projects" {
                    h2 { "Selected Projects" }
                    @for project in &resume.projects {
                        div class="row" {
                            div class="when" {
                                @if let Some(start) = &project.start_date {
                                    (STYLE.dates(start, project.end_date.as_deref()))
                                }
                            }
                            div {
                                strong { (project.name) }
                                @if let Some(desc) = &project.description { ". " (desc) }
                            }
                        }
                    }
                }
            }
            @if !resume.volunteer.is_empty() {
                section data-section="volunteer" {
                    h2 { "Service" }
                    @for v in &resume.volunteer {
                        div class="row" {
                            div class="when" { (STYLE.dates(&v.start_date, v.end_date.as_deref())) }
                            div { (v.position) ", " strong { (v.organization) } }
                        }
                    }
                }
            }
            @if !resume.skills.is_empty() {
                section data-section="skills" {
                    h2 { "Skills" }
                    @for skill in &resume.skills {
                        p { strong { (skill.name) ": " } (skill.keywords.join(", ")) }
                    }
                }
            }
            @if !resume.languages.is_empty() {
                section data-section="languages" {
                    h2 { "Languages" }
                    p {
                        @for (i, l) in resume.languages.iter().enumerate() {
                            @if i > 0 { "; " }
                            (l.language)
                            @if let Some(f) = &l.fluency { " (" (f) ")" }
                        }
                    }
                }
            }
            @if !resume.interests.is_empty() {
                section data-section="interests" {
                    h2 { "Interests" }
                    p { (resume.interests.iter().map(|i| i.name.as_str()).collect::<Vec<_>>().join(", ")) }
                }
            }
            @if !resume.references.is_empty() {
                section data-section="references" {
                    h2 { "References" }
                    @for r in &resume.references {
                        p { em { "“" (r.reference) "”" } " " (r.name) }
                    }
                }
            }
        }
    }
}
