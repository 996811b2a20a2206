//! Report domain models and parameters.

use chrono::{DateTime, Utc};

/// A report joined with the story and accounts it references, as shown to
/// moderators in the console's report listing and in new-report notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub report_id: i32,
    pub story_id: i32,
    pub story_title: String,
    pub author_id: i32,
    pub author_login: String,
    pub reporter_id: i32,
    pub reporter_login: String,
    pub reason: Option<String>,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Parameters for filing a report against a story.
#[derive(Debug, Clone)]
pub struct CreateReportParam {
    pub story_id: i32,
    pub user_id: i32,
    pub reason: Option<String>,
    pub details: Option<String>,
}
