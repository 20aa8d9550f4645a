//! Standard: single column, neutral sans-serif, the default layout.

use maud::{html, Markup, PreEscaped};

use crate::models::resume::{non_blank, Resume};
use crate::render::format::network_icon;
use crate::render::Style;

const STYLE: Style = Style::Standard;

const CSS: &str = r#"
.resume--standard { max-width: 820px; margin: 0 auto; padding: 2.5rem 2rem; font-family: system-ui, sans-serif; color: #1f2933; line-height: 1.55; }
.resume--standard h1 { font-size: 2.2rem; margin: 0; }
.resume--standard .label { color: #52606d; font-size: 1.1rem; margin: .25rem 0 1rem; }
.resume--standard .contact { display: flex; flex-wrap: wrap; gap: .75rem 1.5rem; font-size: .9rem; }
.resume--standard .contact a { color: #2563eb; text-decoration: none; display: inline-flex; align-items: center; gap: .35rem; }
.resume--standard section { margin-top: 2rem; }
.resume--standard h2 { font-size: 1.1rem; text-transform: uppercase; letter-spacing: .06em; color: #2563eb; border-bottom: 1px solid #e4e7eb; padding-bottom: .35rem; }
.resume--standard .entry { margin-bottom: 1.25rem; }
.resume--standard .entry-head { display: flex; justify-content: space-between; gap: 1rem; }
.resume--standard .dates { color: #7b8794; font-size: .9rem; white-space: nowrap; }
.resume--standard .tags { display: flex; flex-wrap: wrap; gap: .4rem; list-style: none; padding: 0; }
.resume--standard .tags li { background: #eef2ff; border-radius: 999px; padding: .1rem .6rem; font-size: .8rem; }
"#;

pub fn render(resume: &Resume) -> Markup {
    let b = &resume.basics;
    html! {
        article class="resume resume--standard" {
            style { (PreEscaped(CSS)) }
            header {
                h1 { (b.name) }
                @if let Some(label) = &b.label { p class="label" { (label) } }
                div class="contact" {
                    @if let Some(email) = &b.email { a href={ "mailto:" (email) } { (email) } }
                    @if let Some(phone) = &b.phone { span { (phone) } }
                    @if let Some(url) = &b.url { a href=(url) { (url) } }
                    @if let Some(location) = &b.location { span { (location.display()) } }
                    @for profile in &b.profiles {
                        a href=[profile.url.as_deref()] rel="me noopener" {
                            (network_icon(&profile.network).glyph())
                            (profile.username.as_deref().unwrap_or(&profile.network))
                        }
                    }
                }
            }
            @if let Some(summary) = non_blank(b.summary.as_deref()) {
                section data-section="summary" { h2 { "Summary" } p { (summary) } }
            }
            @if !resume.work.is_empty() {
                section data-section="work" {
                    h2 { "Experience" }
                    @for job in &resume.work {
                        div class="entry" {
                            div class="entry-head" {
                                div { strong { (job.position) } " at " (job.name) }
                                span class="dates" { (STYLE.dates(&job.start_date, job.end_date.as_deref())) }
                            }
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
                    h2 { "Projects" }
                    @for project in &resume.projects {
                        div class="entry" {
                            div class="entry-head" {
                                @if let Some(url) = &project.url {
                                    a href=(url) { strong { (project.name) } }
                                } @else {
                                    strong { (project.name) }
                                }
                                @if let Some(start) = &project.start_date {
                                    span class="dates" { (STYLE.dates(start, project.end_date.as_deref())) }
                                }
                            }
                            @if let Some(desc) = &project.description { p { (desc) } }
                            @if !project.highlights.is_empty() {
                                ul { @for h in &project.highlights { li { (h) } } }
                            }
                        }
                    }
                }
            }
            @if !resume.education.is_empty() {
                section data-section="education" {
                    h2 { "Education" }
                    @for edu in &resume.education {
                        div class="entry entry-head" {
                            div {
                                strong { (edu.institution) }
                                br;
                                (edu.study_type) " in " (edu.area)
                                @if let Some(score) = &edu.score { " · GPA " (score) }
                            }
                            span class="dates" { (STYLE.dates(&edu.start_date, edu.end_date.as_deref())) }
                        }
                    }
                }
            }
            @if !resume.skills.is_empty() {
                section data-section="skills" {
                    h2 { "Skills" }
                    @for skill in &resume.skills {
                        div class="entry" {
                            strong { (skill.name) }
                            @if let Some(level) = &skill.level { " (" (level) ")" }
                            ul class="tags" { @for k in &skill.keywords { li { (k) } } }
                        }
                    }
                }
            }
            @if !resume.volunteer.is_empty() {
                section data-section="volunteer" {
                    h2 { "Volunteering" }
                    @for v in &resume.volunteer {
                        div class="entry" {
                            div class="entry-head" {
                                div { strong { (v.position) } ", " (v.organization) }
                                span class="dates" { (STYLE.dates(&v.start_date, v.end_date.as_deref())) }
                            }
                            @if let Some(summary) = &v.summary { p { (summary) } }
                        }
                    }
                }
            }
            @if !resume.awards.is_empty() {
                section data-section="awards" {
                    h2 { "Awards" }
                    ul { @for a in &resume.awards {
                        li { strong { (a.title) } ", " (a.awarder) " (" (STYLE.date(&a.date)) ")" }
                    } }
                }
            }
            @if !resume.certificates.is_empty() {
                section data-section="certificates" {
                    h2 { "Certificates" }
                    ul { @for c in &resume.certificates {
                        li { strong { (c.name) } ", " (c.issuer) " (" (STYLE.date(&c.date)) ")" }
                    } }
                }
            }
            @if !resume.publications.is_empty() {
                section data-section="publications" {
                    h2 { "Publications" }
                    ul { @for publication in &resume.publications {
                        li {
                            @if let Some(url) = &publication.url { a href=(url) { (publication.name) } } @else { (publication.name) }
                            ", " (publication.publisher) " (" (STYLE.date(&publication.release_date)) ")"
                        }
                    } }
                }
            }
            @if !resume.languages.is_empty() {
                section data-section="languages" {
                    h2 { "Languages" }
                    ul class="tags" { @for l in &resume.languages {
                        li { (l.language) @if let Some(f) = &l.fluency { " · " (f) } }
                    } }
                }
            }
            @if !resume.interests.is_empty() {
                section data-section="interests" {
                    h2 { "Interests" }
                    ul class="tags" { @for i in &resume.interests { li { (i.name) } } }
                }
            }
            @if !resume.references.is_empty() {
                section data-section="references" {
                    h2 { "References" }
                    @for r in &resume.references {
                        blockquote { p { (r.reference) } footer { (r.name) } }
                    }
                }
            }
        }
    }
}
