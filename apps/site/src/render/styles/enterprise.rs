//! Enterprise: corporate header band, dense tables, muted blue palette.

use maud::{html, Markup, PreEscaped};

use crate::models::resume::{non_blank, Resume};
use crate::render::format::network_icon;
use crate::render::Style;

const STYLE: Style = Style::Enterprise;

const CSS: &str = r#"
.resume--enterprise { max-width: 960px; margin: 0 auto; font-family: 'IBM Plex Sans', Arial, sans-serif; color: #161616; background: #fff; border: 1px solid #c6c6c6; }
.resume--enterprise .band { background: #0f2b46; color: #fff; padding: 1.8rem 2rem; display: flex; justify-content: space-between; gap: 2rem; }
.resume--enterprise h1 { margin: 0; font-weight: 600; font-size: 2rem; }
.resume--enterprise .label { color: #a6c8ff; margin-top: .2rem; }
.resume--enterprise .band dl { margin: 0; font-size: .85rem; display: grid; grid-template-columns: auto auto; gap: .2rem .8rem; }
.resume--enterprise .band dt { color: #a6c8ff; }
.resume--enterprise .band a { color: #fff; display: inline-flex; gap: .3rem; align-items: center; }
.resume--enterprise .body { padding: 1.5rem 2rem; }
.resume--enterprise h2 { font-size: .95rem; text-transform: uppercase; letter-spacing: .08em; color: #0f62fe; border-bottom: 2px solid #0f62fe; padding-bottom: .3rem; }
.resume--enterprise table { width: 100%; border-collapse: collapse; font-size: .92rem; }
.resume--enterprise td { vertical-align: top; padding: .45rem .3rem; border-bottom: 1px solid #e0e0e0; }
.resume--enterprise td.period { width: 12rem; color: #525252; white-space: nowrap; }
"#;

pub fn render(resume: &Resume) -> Markup {
    let b = &resume.basics;
    html! {
        article class="resume resume--enterprise" {
            style { (PreEscaped(CSS)) }
            header class="band" {
                div {
                    h1 { (b.name) }
                    @if let Some(label) = &b.label { div class="label" { (label) } }
                }
                dl {
                    @if let Some(email) = &b.email { dt { "Email" } dd { a href={ "mailto:" (email) } { (email) } } }
                    @if let Some(phone) = &b.phone { dt { "Phone" } dd { (phone) } }
                    @if let Some(location) = &b.location { dt { "Location" } dd { (location.display()) } }
                    @if let Some(url) = &b.url { dt { "Web" } dd { a href=(url) { (url) } } }
                    @for profile in &b.profiles {
                        dt { (profile.network) }
                        dd {
                            a href=[profile.url.as_deref()] rel="me noopener" {
                                (network_icon(&profile.network).glyph())
                                (profile.username.as_deref().unwrap_or("Profile"))
                            }
                        }
                    }
                }
            }
            div class="body" {
                @if let Some(summary) = non_blank(b.summary.as_deref()) {
                    section data-section="summary" { h2 { "Executive Summary" } p { (summary) } }
                }
                @if !resume.work.is_empty() {
                    section data-section="work" {
                        h2 { "Employment History" }
                        table { tbody { @for job in &resume.work {
                            tr {
                                td class="period" { (STYLE.dates(&job.start_date, job.end_date.as_deref())) }
                                td {
                                    strong { (job.position) } ", " (job.name)
                                    @if let Some(loc) = &job.location { " (" (loc) ")" }
                                    @if let Some(summary) = &job.summary { div { (summary) } }
                                    @if !job.highlights.is_empty() {
                                        ul { @for h in &job.highlights { li { (h) } } }
                                    }
                                }
                            }
                        } } }
                    }
                }
                @if !resume.skills.is_empty() {
                    section data-section="skills" {
                        h2 { "Core Competencies" }
                        table { tbody { @for skill in &resume.skills {
                            tr {
                                td class="period" { strong { (skill.name) } }
                                td { (skill.keywords.join(", ")) @if let Some(level) = &skill.level { " (" (level) ")" } }
                            }
                        } } }
                    }
                }
                @if !resume.projects.is_empty() {
                    section data-section="projects" {
                        h2 { "Key Initiatives" }
                        table { tbody { @for project in &resume.projects {
                            tr {
                                td class="period" {
                                    @if let Some(start) = &project.start_date {
                                        (STYLE.dates(start, project.end_date.as_deref()))
                                    }
                                }
                                td {
                                    strong { (project.name) }
                                    @if let Some(desc) = &project.description { ": " (desc) }
                                    @if !project.highlights.is_empty() {
                                        ul { @for h in &project.highlights { li { (h) } } }
                                    }
                                }
                            }
                        } } }
                    }
                }
                @if !resume.education.is_empty() {
                    section data-section="education" {
                        h2 { "Education" }
                        table { tbody { @for edu in &resume.education {
                            tr {
                                td class="period" { (STYLE.dates(&edu.start_date, edu.end_date.as_deref())) }
                                td { strong { (edu.study_type) ", " (edu.area) } br; (edu.institution) }
                            }
                        } } }
                    }
                }
                @if !resume.certificates.is_empty() {
                    section data-section="certificates" {
                        h2 { "Certifications" }
                        table { tbody { @for c in &resume.certificates {
                            tr { td class="period" { (STYLE.date(&c.date)) } td { (c.name) ", " (c.issuer) } }
                        } } }
                    }
                }
                @if !resume.awards.is_empty() {
                    section data-section="awards" {
                        h2 { "Recognition" }
                        table { tbody { @for a in &resume.awards {
                            tr { td class="period" { (STYLE.date(&a.date)) } td { (a.title) ", " (a.awarder) } }
                        } } }
                    }
                }
                @if !resume.publications.is_empty() {
                    section data-section="publications" {
                        h2 { "Publications" }
                        table { tbody { @for publication in &resume.publications {
                            tr {
                                td class="period" { (STYLE.date(&publication.release_date)) }
                                td { (publication.name) ", " (publication.publisher) }
                            }
                        } } }
                    }
                }
                @if !resume.volunteer.is_empty() {
                    section data-section="volunteer" {
                        h2 { "Community Involvement" }
                        table { tbody { @for v in &resume.volunteer {
                            tr {
                                td class="period" { (STYLE.dates(&v.start_date, v.end_date.as_deref())) }
                                td { (v.position) ", " (v.organization) }
                            }
                        } } }
                    }
                }
                @if !resume.languages.is_empty() {
                    section data-section="languages" {
                        h2 { "Languages" }
                        table { tbody { @for l in &resume.languages {
                            tr { td class="period" { (l.language) } td { (l.fluency.as_deref().unwrap_or("")) } }
                        } } }
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
                        table { tbody { @for r in &resume.references {
                            tr { td class="period" { (r.name) } td { (r.reference) } }
                        } } }
                    }
                }
            }
        }
    }
}
