//! Comment service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        comment::CommentRepository, statistics::StatisticsRepository, story::StoryRepository,
    },
    error::AppError,
    model::comment::{AddCommentParam, Comment},
};

/// Service providing business logic for story comments.
pub struct CommentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to a story.
    ///
    /// Blank content is rejected. Commenting on someone else's story bumps the
    /// owner's received-comments counter, and the story's `updated_at` is
    /// refreshed.
    pub async fn add(&self, param: AddCommentParam) -> Result<Comment, AppError> {
        let story = StoryRepository::new(self.db)
            .find_by_id(param.story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;

        let content = param.content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::BadRequest(
                "Comment content cannot be empty".to_string(),
            ));
        }

        let comment_repo = CommentRepository::new(self.db);
        let comment = comment_repo
            .insert(AddCommentParam {
                story_id: param.story_id,
                user_id: param.user_id,
                content,
            })
            .await?;

        if story.owner_id != param.user_id {
            StatisticsRepository::new(self.db)
                .increment_comments_received(story.owner_id)
                .await?;
        }

        StoryRepository::new(self.db).touch(story.id).await?;

        let (comment, author) = comment_repo
            .find_with_author(param.story_id, comment.id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Created comment {} not found", comment.id))
            })?;

        Ok(Comment::from_entities(comment, author))
    }

    /// Gets a story's comments, newest first.
    pub async fn list(&self, story_id: i32) -> Result<Vec<Comment>, AppError> {
        if StoryRepository::new(self.db).find_by_id(story_id).await?.is_none() {
            return Err(AppError::NotFound("Story not found".to_string()));
        }

        let rows = CommentRepository::new(self.db).list_for_story(story_id).await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| Comment::from_entities(comment, author))
            .collect())
    }

    /// Gets a single comment.
    pub async fn get(&self, story_id: i32, comment_id: i32) -> Result<Comment, AppError> {
        let (comment, author) = CommentRepository::new(self.db)
            .find_with_author(story_id, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        Ok(Comment::from_entities(comment, author))
    }

    /// Removes a comment. Comment author or story owner only.
    pub async fn delete(
        &self,
        story_id: i32,
        comment_id: i32,
        acting_user_id: i32,
    ) -> Result<(), AppError> {
        let story = StoryRepository::new(self.db)
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;

        let comment_repo = CommentRepository::new(self.db);
        let (comment, _) = comment_repo
            .find_with_author(story_id, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.user_id != acting_user_id && story.owner_id != acting_user_id {
            return Err(AppError::Forbidden(
                "Only the comment author or story owner can delete a comment".to_string(),
            ));
        }

        comment_repo.delete(comment).await?;
        StoryRepository::new(self.db).touch(story.id).await?;

        Ok(())
    }
}
