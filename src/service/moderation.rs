//! Moderation actions invoked from the Telegram console.
//!
//! This module provides the `ModerationService` for the three operator
//! actions: listing recent reports, removing a story with everything that
//! references it, and warning a user. State-changing work completes against
//! the database before any notification goes out; the notification emails are
//! best-effort side effects that can never roll back or re-fail a committed
//! moderation action.

use sea_orm::DatabaseConnection;

use crate::{
    data::{report::ReportRepository, story::StoryRepository, user::UserRepository},
    error::AppError,
    model::{
        moderation::{BanOutcome, BanStoryParam, EditRequestOutcome, WarnOutcome, WarnUserParam},
        report::ReportSummary,
    },
    service::email::Mailer,
};

/// Number of reports shown by the console's report listing.
pub const REPORT_LISTING_LIMIT: u64 = 10;

/// Upper bound on ban reasons and warning messages.
pub const REASON_MAX_CHARS: usize = 1000;

/// Service providing the moderation console's gateway operations.
pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
}

impl<'a> ModerationService<'a> {
    /// Creates a new ModerationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `mailer` - Outbound email gateway for owner/user notifications
    ///
    /// # Returns
    /// - `ModerationService` - New service instance
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer) -> Self {
        Self { db, mailer }
    }

    /// Gets the most recent reports for the console listing.
    pub async fn list_reports(&self) -> Result<Vec<ReportSummary>, AppError> {
        Ok(ReportRepository::new(self.db)
            .recent(REPORT_LISTING_LIMIT)
            .await?)
    }

    /// Removes a story and everything that references it.
    ///
    /// The story, its parts, tag links, likes, comments, and reports are
    /// deleted in one all-or-nothing transaction. After the commit the owner
    /// is emailed the removal reason, best-effort: a send failure is logged
    /// and reflected in the outcome but never undoes the deletion.
    ///
    /// # Arguments
    /// - `param` - Story id and the operator's reason
    ///
    /// # Returns
    /// - `Ok(Some(BanOutcome))` - Story removed; outcome carries title, owner,
    ///   and whether the owner was notified
    /// - `Ok(None)` - No story with that id; nothing was deleted
    /// - `Err(AppError)` - Validation or database error; the transaction is
    ///   rolled back and no rows are deleted
    pub async fn ban_story(&self, param: BanStoryParam) -> Result<Option<BanOutcome>, AppError> {
        let reason = param.reason.trim().to_string();
        if reason.is_empty() {
            return Err(AppError::BadRequest("Reason cannot be empty".to_string()));
        }
        if reason.chars().count() > REASON_MAX_CHARS {
            return Err(AppError::BadRequest("Reason is too long".to_string()));
        }

        let story_repo = StoryRepository::new(self.db);

        let Some(story) = story_repo.find_by_id(param.story_id).await? else {
            return Ok(None);
        };

        let owner = UserRepository::new(self.db)
            .find_by_id(story.owner_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Owner of story {} not found", story.id))
            })?;

        story_repo.delete_cascade(story.id).await?;

        tracing::info!(
            "Banned story {} ({:?}) owned by {}: {}",
            story.id,
            story.title,
            owner.login,
            reason
        );

        let owner_notified = if owner.email.is_empty() {
            false
        } else {
            self.notify(
                &owner.email,
                "Your story has been removed",
                &format!(
                    "Your story \"{}\" was removed by the moderation team.\n\nReason: {}",
                    story.title, reason
                ),
            )
            .await
        };

        Ok(Some(BanOutcome {
            story_id: story.id,
            title: story.title,
            owner_login: owner.login,
            reason,
            owner_notified,
        }))
    }

    /// Warns a user by email.
    ///
    /// No warning record is persisted; this is notification only. A user
    /// without an email address simply gets no email, and a send failure is
    /// reported in the outcome so the operator can see it.
    ///
    /// # Arguments
    /// - `param` - User id and the warning text
    ///
    /// # Returns
    /// - `Ok(Some(WarnOutcome))` - User exists; outcome carries login and
    ///   whether the email went out
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::BadRequest)` - Blank or oversized warning text
    pub async fn warn_user(&self, param: WarnUserParam) -> Result<Option<WarnOutcome>, AppError> {
        let message = param.message.trim().to_string();
        if message.is_empty() {
            return Err(AppError::BadRequest(
                "Warning message cannot be empty".to_string(),
            ));
        }
        if message.chars().count() > REASON_MAX_CHARS {
            return Err(AppError::BadRequest("Warning message is too long".to_string()));
        }

        let Some(user) = UserRepository::new(self.db).find_by_id(param.user_id).await? else {
            return Ok(None);
        };

        let email_sent = if user.email.is_empty() {
            false
        } else {
            self.notify(
                &user.email,
                "Moderation warning",
                &format!(
                    "You have received a warning from the moderation team.\n\n{}",
                    message
                ),
            )
            .await
        };

        Ok(Some(WarnOutcome {
            user_id: user.id,
            login: user.login,
            message,
            email_sent,
        }))
    }

    /// Asks a story's owner to edit the story, by email.
    ///
    /// # Returns
    /// - `Ok(Some(EditRequestOutcome))` - Story exists; outcome carries title,
    ///   owner, and whether the email went out
    /// - `Ok(None)` - No story with that id
    pub async fn request_edit(&self, story_id: i32) -> Result<Option<EditRequestOutcome>, AppError> {
        let Some(story) = StoryRepository::new(self.db).find_by_id(story_id).await? else {
            return Ok(None);
        };

        let owner = UserRepository::new(self.db)
            .find_by_id(story.owner_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Owner of story {} not found", story.id))
            })?;

        let email_sent = if owner.email.is_empty() {
            false
        } else {
            self.notify(
                &owner.email,
                "Your story requires changes",
                &format!(
                    "The moderation team has asked you to revise your story \"{}\". \
                     Please review its content.",
                    story.title
                ),
            )
            .await
        };

        Ok(Some(EditRequestOutcome {
            story_id: story.id,
            title: story.title,
            owner_login: owner.login,
            email_sent,
        }))
    }

    /// Sends one best-effort email, logging instead of propagating failures.
    async fn notify(&self, to: &str, subject: &str, body: &str) -> bool {
        match self.mailer.send(to, subject, body).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to send {:?} email to {}: {}", subject, to, e);
                false
            }
        }
    }
}
