//! Mock document download. No document is generated: the response is a
//! placeholder body carrying the filename the real export would use.

use chrono::NaiveDate;

use crate::preferences::DownloadFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDownload {
    pub filename: String,
    pub content: String,
}

/// `{username}-{resume_slug}-{YYYY-MM-DD}.{ext}`
pub fn mock_filename(
    username: &str,
    resume_slug: &str,
    date: NaiveDate,
    format: DownloadFormat,
) -> String {
    format!(
        "{username}-{resume_slug}-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

pub fn mock_download(
    username: &str,
    resume_slug: &str,
    date: NaiveDate,
    format: DownloadFormat,
) -> MockDownload {
    MockDownload {
        filename: mock_filename(username, resume_slug, date, format),
        content: format!("Mock {} content for {username}/{resume_slug}", format.as_str()),
    }
}

impl MockDownload {
    /// `Content-Disposition` value; quotes and backslashes in the name are dropped.
    pub fn content_disposition(&self) -> String {
        let safe: String = self
            .filename
            .chars()
            .filter(|c| *c != '"' && *c != '\\' && !c.is_control())
            .collect();
        format!("attachment; filename=\"{safe}\"")
    }
}
