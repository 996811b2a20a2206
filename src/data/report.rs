//! Report data repository for database operations.
//!
//! Reports reference a story and the user who filed them. The moderation
//! console consumes them joined with both, newest first.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::report::{CreateReportParam, ReportSummary};

/// Repository providing database operations for story reports.
pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    /// Creates a new ReportRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReportRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a report against a story.
    pub async fn insert(&self, param: CreateReportParam) -> Result<entity::report::Model, DbErr> {
        entity::report::ActiveModel {
            story_id: ActiveValue::Set(param.story_id),
            user_id: ActiveValue::Set(param.user_id),
            reason: ActiveValue::Set(param.reason),
            details: ActiveValue::Set(param.details),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Checks whether a user has already reported a story.
    pub async fn exists_for_story_and_user(
        &self,
        story_id: i32,
        user_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Report::find()
            .filter(entity::report::Column::StoryId.eq(story_id))
            .filter(entity::report::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Builds the moderator-facing summary for a single report.
    ///
    /// # Returns
    /// - `Ok(Some(ReportSummary))` - Report found with story and accounts joined
    /// - `Ok(None)` - No report with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn summary(&self, report_id: i32) -> Result<Option<ReportSummary>, DbErr> {
        let Some(report) = entity::prelude::Report::find_by_id(report_id).one(self.db).await?
        else {
            return Ok(None);
        };

        self.summarize(report).await.map(Some)
    }

    /// Gets the most recent reports joined with their stories and accounts.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of reports to return
    ///
    /// # Returns
    /// - `Ok(Vec<ReportSummary>)` - Up to `limit` summaries, newest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn recent(&self, limit: u64) -> Result<Vec<ReportSummary>, DbErr> {
        let reports = entity::prelude::Report::find()
            .order_by_desc(entity::report::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        let mut summaries = Vec::with_capacity(reports.len());
        for report in reports {
            summaries.push(self.summarize(report).await?);
        }

        Ok(summaries)
    }

    async fn summarize(&self, report: entity::report::Model) -> Result<ReportSummary, DbErr> {
        let story = entity::prelude::Story::find_by_id(report.story_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("story {} of report {} missing", report.story_id, report.id))
            })?;

        let author = entity::prelude::User::find_by_id(story.owner_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("owner of story {} missing", story.id))
            })?;

        let reporter = entity::prelude::User::find_by_id(report.user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("reporter of report {} missing", report.id))
            })?;

        Ok(ReportSummary {
            report_id: report.id,
            story_id: story.id,
            story_title: story.title,
            author_id: author.id,
            author_login: author.login,
            reporter_id: reporter.id,
            reporter_login: reporter.login,
            reason: report.reason,
            details: report.details,
            created_at: report.created_at,
        })
    }
}
