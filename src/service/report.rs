//! Report service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::{report::ReportRepository, story::StoryRepository},
    error::AppError,
    model::report::{CreateReportParam, ReportSummary},
};

/// Service providing business logic for story reports.
pub struct ReportService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a report against a story.
    ///
    /// A user can report a given story at most once. Returns the full
    /// summary so the caller can notify the moderation channel.
    ///
    /// # Arguments
    /// - `param` - Story id, reporting user, reason, and details
    ///
    /// # Returns
    /// - `Ok(ReportSummary)` - The stored report with story and accounts joined
    /// - `Err(AppError::NotFound)` - No story with that id
    /// - `Err(AppError::BadRequest)` - The user already reported this story
    pub async fn create(&self, param: CreateReportParam) -> Result<ReportSummary, AppError> {
        if StoryRepository::new(self.db)
            .find_by_id(param.story_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Story not found".to_string()));
        }

        let report_repo = ReportRepository::new(self.db);

        if report_repo
            .exists_for_story_and_user(param.story_id, param.user_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "You have already reported this story".to_string(),
            ));
        }

        let CreateReportParam {
            story_id,
            user_id,
            reason,
            details,
        } = param;

        let report = report_repo
            .insert(CreateReportParam {
                story_id,
                user_id,
                reason: reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty()),
                details: details.map(|d| d.trim().to_string()).filter(|d| !d.is_empty()),
            })
            .await?;

        report_repo.summary(report.id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Created report {} not found", report.id))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    async fn report_db() -> sea_orm::DatabaseConnection {
        TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::Story)
            .with_table(entity::prelude::Report)
            .build()
            .await
            .unwrap()
            .db
            .unwrap()
    }

    /// A user can report a story once; the second attempt is rejected.
    #[tokio::test]
    async fn rejects_second_report_from_same_user() {
        let db = report_db().await;
        let owner = factory::create_user(&db).await.unwrap();
        let reporter = factory::create_user(&db).await.unwrap();
        let story = factory::create_story(&db, owner.id).await.unwrap();

        let service = ReportService::new(&db);
        let param = CreateReportParam {
            story_id: story.id,
            user_id: reporter.id,
            reason: Some("spam".to_string()),
            details: None,
        };

        let summary = service.create(param.clone()).await.unwrap();
        assert_eq!(summary.story_id, story.id);
        assert_eq!(summary.reporter_id, reporter.id);

        let second = service.create(param).await;
        assert!(matches!(second, Err(AppError::BadRequest(_))));
    }

    /// Reporting a missing story is a not-found error.
    #[tokio::test]
    async fn rejects_unknown_story() {
        let db = report_db().await;
        let reporter = factory::create_user(&db).await.unwrap();

        let result = ReportService::new(&db)
            .create(CreateReportParam {
                story_id: 999,
                user_id: reporter.id,
                reason: None,
                details: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
