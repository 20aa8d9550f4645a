//! Neo-brutalist: heavy borders, hard shadows, loud accent blocks.

use maud::{html, Markup, PreEscaped};

use crate::models::resume::{non_blank, Resume};
use crate::render::format::network_icon;
use crate::render::Style;

const STYLE: Style = Style::NeoBrutalist;

const CSS: &str = r#"
.resume--neo-brutalist { max-width: 900px; margin: 2rem auto; padding: 2rem; font-family: 'Space Grotesk', 'Arial Black', sans-serif; background: #fdf6e3; color: #000; border: 4px solid #000; box-shadow: 10px 10px 0 #000; }
.resume--neo-brutalist h1 { font-size: 3.2rem; text-transform: uppercase; line-height: 1; margin: 0; }
.resume--neo-brutalist .label { display: inline-block; background: #ff5c8a; border: 3px solid #000; padding: .2rem .6rem; font-weight: 700; margin: .8rem 0; }
.resume--neo-brutalist .links { display: flex; flex-wrap: wrap; gap: .6rem; }
.resume--neo-brutalist .links a, .resume--neo-brutalist .links span { border: 3px solid #000; background: #fff; padding: .25rem .6rem; color: #000; font-weight: 700; text-decoration: none; box-shadow: 3px 3px 0 #000; display: inline-flex; gap: .3rem; align-items: center; }
.resume--neo-brutalist section { border: 3px solid #000; background: #fff; margin-top: 1.5rem; padding: 1rem 1.2rem; box-shadow: 6px 6px 0 #000; }
.resume--neo-brutalist h2 { margin: -1rem -1.2rem 1rem; padding: .4rem 1.2rem; background: #ffd23f; border-bottom: 3px solid #000; text-transform: uppercase; font-size: 1.2rem; }
.resume--neo-brutalist .block + .block { border-top: 2px dashed #000; margin-top: .8rem; padding-top: .8rem; }
.resume--neo-brutalist .stamp { font-family: monospace; font-weight: 700; background: #000; color: #fdf6e3; padding: .1rem .4rem; }
.resume--neo-brutalist .chips { display: flex; flex-wrap: wrap; gap: .4rem; list-style: none; padding: 0; }
.resume--neo-brutalist .chips li { border: 2px solid #000; padding: .05rem .45rem; background: #a0e7e5; font-weight: 700; }
"#;

pub fn render(resume: &Resume) -> Markup {
    let b = &resume.basics;
    html! {
        article class="resume resume--neo-brutalist" {
            style { (PreEscaped(CSS)) }
            header {
                h1 { (b.name) }
                @if let Some(label) = &b.label { div class="label" { (label) } }
                div class="links" {
                    @if let Some(email) = &b.email { a href={ "mailto:" (email) } { "EMAIL" } }
                    @if let Some(url) = &b.url { a href=(url) { "WEB" } }
                    @if let Some(phone) = &b.phone { span { (phone) } }
                    @if let Some(location) = &b.location { span { (location.display()) } }
                    @for profile in &b.profiles {
                        a href=[profile.url.as_deref()] rel="me noopener" {
                            (network_icon(&profile.network).glyph())
                            (profile.network.to_uppercase())
                        }
                    }
                }
            }
            @if let Some(summary) = non_blank(b.summary.as_deref()) {
                section data-section="summary" { h2 { "About" } p { (summary) } }
            }
            @if !resume.work.is_empty() {
                section data-section="work" {
                    h2 { "Work" }
                    @for job in &resume.work {
                        div class="block" {
                            span class="stamp" { (STYLE.dates(&job.start_date, job.end_date.as_deref())) }
                            h3 { (job.position) " @ " (job.name) }
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
                        div class="block" {
                            @if let Some(start) = &project.start_date {
                                span class="stamp" { (STYLE.dates(start, project.end_date.as_deref())) }
                            }
                            h3 {
                                @if let Some(url) = &project.url { a href=(url) { (project.name) } }
                                @else { (project.name) }
                            }
                            @if let Some(desc) = &project.description { p { (desc) } }
                            @if !project.keywords.is_empty() {
                                ul class="chips" { @for k in &project.keywords { li { (k) } } }
                            }
                        }
                    }
                }
            }
            @if !resume.skills.is_empty() {
                section data-section="skills" {
                    h2 { "Skills" }
                    @for skill in &resume.skills {
                        div class="block" {
                            h3 { (skill.name) @if let Some(level) = &skill.level { " / " (level) } }
                            ul class="chips" { @for k in &skill.keywords { li { (k) } } }
                        }
                    }
                }
            }
            @if !resume.education.is_empty() {
                section data-section="education" {
                    h2 { "Education" }
                    @for edu in &resume.education {
                        div class="block" {
                            span class="stamp" { (STYLE.dates(&edu.start_date, edu.end_date.as_deref())) }
                            h3 { (edu.institution) }
                            p { (edu.study_type) " / " (edu.area) }
                        }
                    }
                }
            }
            @if !resume.volunteer.is_empty() {
                section data-section="volunteer" {
                    h2 { "Volunteer" }
                    @for v in &resume.volunteer {
                        div class="block" {
                            span class="stamp" { (STYLE.dates(&v.start_date, v.end_date.as_deref())) }
                            h3 { (v.position) " @ " (v.organization) }
                        }
                    }
                }
            }
            @if !resume.awards.is_empty() {
                section data-section="awards" {
                    h2 { "Awards" }
                    @for a in &resume.awards {
                        div class="block" { span class="stamp" { (STYLE.date(&a.date)) } " " strong { (a.title) } " / " (a.awarder) }
                    }
                }
            }
            @if !resume.certificates.is_empty() {
                section data-section="certificates" {
                    h2 { "Certs" }
                    @for c in &resume.certificates {
                        div class="block" { span class="stamp" { (STYLE.date(&c.date)) } " " strong { (c.name) } " / " (c.issuer) }
                    }
                }
            }
            @if !resume.publications.is_empty() {
                section data-section="publications" {
                    h2 { "Writing" }
                    @for publication in &resume.publications {
                        div class="block" {
                            span class="stamp" { (STYLE.date(&publication.release_date)) } " "
                            @if let Some(url) = &publication.url { a href=(url) { (publication.name) } }
                            @else { (publication.name) }
                            " / " (publication.publisher)
                        }
                    }
                }
            }
            @if !resume.languages.is_empty() {
                section data-section="languages" {
                    h2 { "Languages" }
                    ul class="chips" { @for l in &resume.languages {
                        li { (l.language) @if let Some(f) = &l.fluency { ": " (f) } }
                    } }
                }
            }
            @if !resume.interests.is_empty() {
                section data-section="interests" {
                    h2 { "Into" }
                    ul class="chips" { @for i in &resume.interests { li { (i.name) } } }
                }
            }
            @if !resume.references.is_empty() {
                section data-section="references" {
                    h2 { "Word on the street" }
                    @for r in &resume.references {
                        div class="block" { p { "\"" (r.reference) "\"" } strong { (r.name) } }
                    }
                }
            }
        }
    }
}
