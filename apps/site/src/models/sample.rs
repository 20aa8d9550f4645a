//! Built-in resume body rendered on every published page.
//!
//! The settings row decides whether and how a page is shown; the content itself
//! is not yet stored per user, so every slug renders this document.

use crate::models::resume::{
    Award, Basics, Certificate, Education, Interest, Language, Location, Profile, Project,
    Publication, Reference, Resume, Skill, Volunteer, Work,
};

fn s(value: &str) -> String {
    value.to_string()
}

fn list(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn sample_resume() -> Resume {
    Resume {
        basics: Basics {
            name: s("Jordan Rivera"),
            label: Some(s("Senior Software Engineer")),
            image: Some(s("https://example.com/images/jordan.jpg")),
            email: Some(s("jordan.rivera@example.com")),
            phone: Some(s("+1 (555) 010-2030")),
            url: Some(s("https://jordanrivera.dev")),
            summary: Some(s(
                "Backend engineer with nine years of experience building payment and \
                 data platforms. Focused on reliable distributed systems, clear APIs \
                 and mentoring teams through large migrations.",
            )),
            location: Some(Location {
                address: None,
                postal_code: Some(s("94107")),
                city: Some(s("San Francisco")),
                country_code: Some(s("US")),
                region: Some(s("California")),
            }),
            profiles: vec![
                Profile {
                    network: s("GitHub"),
                    username: Some(s("jrivera")),
                    url: Some(s("https://github.com/jrivera")),
                },
                Profile {
                    network: s("LinkedIn"),
                    username: Some(s("jordan-rivera")),
                    url: Some(s("https://www.linkedin.com/in/jordan-rivera")),
                },
                Profile {
                    network: s("Twitter"),
                    username: Some(s("jrivera_dev")),
                    url: Some(s("https://twitter.com/jrivera_dev")),
                },
            ],
        },
        work: vec![
            Work {
                name: s("Northwind Payments"),
                position: s("Senior Software Engineer"),
                location: Some(s("San Francisco, CA")),
                url: Some(s("https://northwind.example.com")),
                start_date: s("2020-03-01"),
                end_date: Some(s("")),
                summary: Some(s("Own the ledger service that settles merchant payouts.")),
                highlights: list(&[
                    "Cut settlement latency from 40 minutes to 90 seconds",
                    "Led migration of 2B ledger rows to a partitioned schema with zero downtime",
                    "Mentored four engineers through their first on-call rotations",
                ]),
            },
            Work {
                name: s("Brightline Analytics"),
                position: s("Software Engineer"),
                location: Some(s("Austin, TX")),
                url: None,
                start_date: s("2016-06-01"),
                end_date: Some(s("2020-02-28")),
                summary: Some(s("Built ingestion pipelines for customer event data.")),
                highlights: list(&[
                    "Designed a streaming ingest path handling 120k events per second",
                    "Reduced warehouse costs by 35% through columnar compaction",
                ]),
            },
        ],
        volunteer: vec![Volunteer {
            organization: s("Code for Good"),
            position: s("Mentor"),
            url: Some(s("https://codeforgood.example.org")),
            start_date: s("2018-01-01"),
            end_date: None,
            summary: Some(s("Weekly mentoring sessions for early-career developers.")),
            highlights: list(&["Coached 30+ mentees into their first engineering roles"]),
        }],
        education: vec![Education {
            institution: s("University of Texas at Austin"),
            url: Some(s("https://www.utexas.edu")),
            area: s("Computer Science"),
            study_type: s("Bachelor of Science"),
            start_date: s("2012-08-01"),
            end_date: Some(s("2016-05-15")),
            score: Some(s("3.8")),
            courses: list(&["Distributed Systems", "Databases", "Compilers"]),
        }],
        awards: vec![Award {
            title: s("Engineering Excellence Award"),
            date: s("2022-11-01"),
            awarder: s("Northwind Payments"),
            summary: Some(s("Recognized for the zero-downtime ledger migration.")),
        }],
        certificates: vec![Certificate {
            name: s("AWS Certified Solutions Architect"),
            date: s("2021-04-10"),
            issuer: s("Amazon Web Services"),
            url: Some(s("https://aws.amazon.com/certification/")),
        }],
        publications: vec![Publication {
            name: s("Exactly-once Settlement at Scale"),
            publisher: s("Northwind Engineering Blog"),
            release_date: s("2023-02-14"),
            url: Some(s("https://northwind.example.com/blog/settlement")),
            summary: Some(s("How idempotency keys and outbox tables keep payouts consistent.")),
        }],
        skills: vec![
            Skill {
                name: s("Backend"),
                level: Some(s("Expert")),
                keywords: list(&["Rust", "Go", "PostgreSQL", "Kafka"]),
            },
            Skill {
                name: s("Infrastructure"),
                level: Some(s("Advanced")),
                keywords: list(&["Kubernetes", "Terraform", "AWS"]),
            },
        ],
        languages: vec![
            Language {
                language: s("English"),
                fluency: Some(s("Native speaker")),
            },
            Language {
                language: s("Spanish"),
                fluency: Some(s("Professional working proficiency")),
            },
        ],
        interests: vec![Interest {
            name: s("Open source"),
            keywords: list(&["Databases", "Developer tooling"]),
        }],
        references: vec![Reference {
            name: s("Priya Natarajan, Engineering Director"),
            reference: s("Jordan is the engineer I trust with our hardest migrations."),
        }],
        projects: vec![Project {
            name: s("ledgerkit"),
            description: Some(s("An open-source double-entry ledger library.")),
            url: Some(s("https://github.com/jrivera/ledgerkit")),
            start_date: Some(s("2021-09-01")),
            end_date: None,
            highlights: list(&["1.2k GitHub stars", "Used in production by three fintechs"]),
            keywords: list(&["Rust", "Accounting"]),
        }],
    }
}
