//! Zine: cut-and-paste collage, rotated cards, typewriter headings.

use maud::{html, Markup, PreEscaped};

use crate::models::resume::{non_blank, Resume};
use crate::render::format::network_icon;
use crate::render::Style;

const STYLE: Style = Style::Zine;

const CSS: &str = r#"
.resume--zine { max-width: 980px; margin: 0 auto; padding: 2rem; font-family: 'Courier Prime', 'Courier New', monospace; background: repeating-linear-gradient(0deg, #fffef5, #fffef5 28px, #e8f0ff 29px); color: #111; }
.resume--zine h1 { font-family: 'Impact', sans-serif; font-size: 4rem; letter-spacing: -.02em; transform: rotate(-2deg); background: #111; color: #fffef5; display: inline-block; padding: 0 .8rem; margin: 0; }
.resume--zine .label { font-size: 1.3rem; background: #ffeb3b; display: inline-block; transform: rotate(1.5deg); padding: .1rem .5rem; margin: .8rem 0; }
.resume--zine .cutouts { display: flex; flex-wrap: wrap; gap: .5rem; }
.resume--zine .cutouts a, .resume--zine .cutouts span { border: 1px dashed #111; padding: .2rem .5rem; background: #fff; color: #111; display: inline-flex; gap: .3rem; align-items: center; }
.resume--zine .board { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.4rem; margin-top: 1.6rem; }
.resume--zine section { background: #fff; padding: 1rem; border: 2px solid #111; box-shadow: 4px 4px 0 rgba(0,0,0,.2); }
.resume--zine section:nth-child(odd) { transform: rotate(-.8deg); }
.resume--zine section:nth-child(even) { transform: rotate(.7deg); }
.resume--zine h2 { font-family: 'Impact', sans-serif; text-transform: uppercase; font-size: 1.6rem; margin: 0 0 .5rem; text-decoration: underline wavy #e91e63; }
.resume--zine .scrawl { font-size: .85rem; background: #111; color: #fff; padding: 0 .3rem; }
"#;

pub fn render(resume: &Resume) -> Markup {
    let b = &resume.basics;
    html! {
        article class="resume resume--zine" {
            style { (PreEscaped(CSS)) }
            header {
                h1 { (b.name) }
                br;
                @if let Some(label) = &b.label { span class="label" { (label) } }
                div class="cutouts" {
                    @if let Some(email) = &b.email { a href={ "mailto:" (email) } { (email) } }
                    @if let Some(url) = &b.url { a href=(url) { (url) } }
                    @if let Some(location) = &b.location { span { "📍 " (location.display()) } }
                    @for profile in &b.profiles {
                        a href=[profile.url.as_deref()] rel="me noopener" {
                            (network_icon(&profile.network).glyph())
                            (profile.network.to_lowercase())
                        }
                    }
                }
            }
            div class="board" {
                @if let Some(summary) = non_blank(b.summary.as_deref()) {
                    section data-section="summary" { h2 { "Hello!" } p { (summary) } }
                }
                @if !resume.work.is_empty() {
                    section data-section="work" {
                        h2 { "Jobs" }
                        @for job in &resume.work {
                            div {
                                span class="scrawl" { (STYLE.dates(&job.start_date, job.end_date.as_deref())) }
                                p { strong { (job.position) } " — " (job.name) }
                                @if !job.highlights.is_empty() {
                                    ul { @for h in &job.highlights { li { (h) } } }
                                }
                            }
                        }
                    }
                }
                @if !resume.projects.is_empty() {
                    section data-section="projects" {
                        h2 { "Stuff I made" }
                        @for project in &resume.projects {
                            div {
                                @if let Some(start) = &project.start_date {
                                    span class="scrawl" { (STYLE.dates(start, project.end_date.as_deref())) }
                                }
                                p {
                                    @if let Some(url) = &project.url { a href=(url) { strong { (project.name) } } }
                                    @else { strong { (project.name) } }
                                    @if let Some(desc) = &project.description { " — " (desc) }
                                }
                            }
                        }
                    }
                }
                @if !resume.skills.is_empty() {
                    section data-section="skills" {
                        h2 { "Tools" }
                        @for skill in &resume.skills {
                            p { strong { (skill.name) } ": " (skill.keywords.join(" + ")) }
                        }
                    }
                }
                @if !resume.education.is_empty() {
                    section data-section="education" {
                        h2 { "School" }
                        @for edu in &resume.education {
                            p {
                                span class="scrawl" { (STYLE.dates(&edu.start_date, edu.end_date.as_deref())) }
                                br;
                                (edu.study_type) " in " (edu.area) " @ " (edu.institution)
                            }
                        }
                    }
                }
                @if !resume.volunteer.is_empty() {
                    section data-section="volunteer" {
                        h2 { "Helping out" }
                        @for v in &resume.volunteer {
                            p {
                                span class="scrawl" { (STYLE.dates(&v.start_date, v.end_date.as_deref())) }
                                br;
                                (v.position) " @ " (v.organization)
                            }
                        }
                    }
                }
                @if !resume.awards.is_empty() {
                    section data-section="awards" {
                        h2 { "Trophies" }
                        ul { @for a in &resume.awards {
                            li { (a.title) " (" (a.awarder) ", " (STYLE.date(&a.date)) ")" }
                        } }
                    }
                }
                @if !resume.certificates.is_empty() {
                    section data-section="certificates" {
                        h2 { "Papers" }
                        ul { @for c in &resume.certificates {
                            li { (c.name) " (" (c.issuer) ", " (STYLE.date(&c.date)) ")" }
                        } }
                    }
                }
                @if !resume.publications.is_empty() {
                    section data-section="publications" {
                        h2 { "Words" }
                        ul { @for publication in &resume.publications {
                            li {
                                @if let Some(url) = &publication.url { a href=(url) { (publication.name) } }
                                @else { (publication.name) }
                                " (" (publication.publisher) ", " (STYLE.date(&publication.release_date)) ")"
                            }
                        } }
                    }
                }
                @if !resume.languages.is_empty() {
                    section data-section="languages" {
                        h2 { "Tongues" }
                        p { (resume.languages.iter().map(|l| l.language.as_str()).collect::<Vec<_>>().join(" / ")) }
                    }
                }
                @if !resume.interests.is_empty() {
                    section data-section="interests" {
                        h2 { "Obsessions" }
                        p { (resume.interests.iter().map(|i| i.name.as_str()).collect::<Vec<_>>().join(" / ")) }
                    }
                }
                @if !resume.references.is_empty() {
                    section data-section="references" {
                        h2 { "Fan mail" }
                        @for r in &resume.references {
                            p { "“" (r.reference) "” — " (r.name) }
                        }
                    }
                }
            }
        }
    }
}
