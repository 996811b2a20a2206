//! Story service for business logic.
//!
//! This module provides the `StoryService` for story creation, visibility
//! rules, tag normalization, owner-only updates and deletion, and search.

use sea_orm::DatabaseConnection;

use crate::{
    data::{statistics::StatisticsRepository, story::StoryRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::story::{
        normalize_tags, CreateStoryParam, SearchParam, SearchResults, StoryDetail, StoryOverview,
        UpdateStoryParam,
    },
};

/// Service providing business logic for stories.
pub struct StoryService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> StoryService<'a> {
    /// Creates a new StoryService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StoryService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a story and bumps the owner's started-stories counter.
    ///
    /// Tag names are normalized before storage; a non-blank `initial_content`
    /// becomes the first part at position 1.
    ///
    /// # Arguments
    /// - `param` - Story fields, raw tag names, and optional first part
    ///
    /// # Returns
    /// - `Ok(StoryOverview)` - The created story with counts and tags
    /// - `Err(AppError::BadRequest)` - Blank title
    /// - `Err(AppError::DbErr)` - Database error during creation
    pub async fn create(&self, mut param: CreateStoryParam) -> Result<StoryOverview, AppError> {
        if param.title.is_empty() {
            return Err(AppError::BadRequest("Title cannot be empty".to_string()));
        }

        param.tags = normalize_tags(&param.tags);

        let story_repo = StoryRepository::new(self.db);
        let story = story_repo.create(param).await?;

        StatisticsRepository::new(self.db)
            .increment_stories_started(story.owner_id)
            .await?;

        story_repo
            .overview(story.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Created story {} not found", story.id)))
    }

    /// Gets all stories, newest first.
    pub async fn list(&self) -> Result<Vec<StoryOverview>, AppError> {
        Ok(StoryRepository::new(self.db).list_overviews().await?)
    }

    /// Gets a full story view, enforcing visibility.
    ///
    /// Private stories require the viewer to be the owner: anonymous viewers
    /// get an authentication error, other users a forbidden error.
    ///
    /// # Arguments
    /// - `story_id` - Story to fetch
    /// - `viewer_id` - Authenticated viewer, if any
    ///
    /// # Returns
    /// - `Ok(StoryDetail)` - Story with parts and contributors
    /// - `Err(AppError::NotFound)` - No story with that id
    /// - `Err(AppError::AuthErr)` / `Err(AppError::Forbidden)` - Visibility violation
    pub async fn get(&self, story_id: i32, viewer_id: Option<i32>) -> Result<StoryDetail, AppError> {
        let detail = StoryRepository::new(self.db)
            .detail(story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;

        if !detail.overview.is_public {
            match viewer_id {
                None => return Err(AuthError::MissingToken.into()),
                Some(viewer) if viewer != detail.overview.owner.id => {
                    return Err(AppError::Forbidden(
                        "You don't have access to this story".to_string(),
                    ));
                }
                Some(_) => {}
            }
        }

        Ok(detail)
    }

    /// Applies a partial update to a story. Owner only.
    pub async fn update(&self, param: UpdateStoryParam) -> Result<StoryOverview, AppError> {
        let story_repo = StoryRepository::new(self.db);

        let story = story_repo
            .find_by_id(param.story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;

        if story.owner_id != param.acting_user_id {
            return Err(AppError::Forbidden(
                "Only the owner can update a story".to_string(),
            ));
        }

        let tags = param.tags.as_deref().map(normalize_tags);

        let story = story_repo
            .update_fields(
                story,
                param.title.map(|t| t.trim().to_string()),
                param.description,
                param.cover_image_url,
                param.is_public,
                param.is_editable,
                tags,
            )
            .await?;

        story_repo
            .overview(story.id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Updated story {} not found", story.id)))
    }

    /// Deletes a story and all its dependent rows. Owner only.
    pub async fn delete(&self, story_id: i32, acting_user_id: i32) -> Result<(), AppError> {
        let story_repo = StoryRepository::new(self.db);

        let story = story_repo
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;

        if story.owner_id != acting_user_id {
            return Err(AppError::Forbidden(
                "Only the owner can delete a story".to_string(),
            ));
        }

        story_repo.delete_cascade(story_id).await?;

        Ok(())
    }

    /// Searches stories by free text and tags.
    pub async fn search(&self, param: SearchParam) -> Result<SearchResults, AppError> {
        Ok(StoryRepository::new(self.db).search(param).await?)
    }

    /// Gets a user's own stories. Private ones only when the viewer is the owner.
    pub async fn user_stories(
        &self,
        user_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<StoryOverview>, AppError> {
        self.require_user(user_id).await?;

        let include_private = viewer_id == Some(user_id);

        Ok(StoryRepository::new(self.db)
            .list_by_owner(user_id, include_private)
            .await?)
    }

    /// Gets the public stories a user contributed parts to without owning.
    pub async fn user_contributions(&self, user_id: i32) -> Result<Vec<StoryOverview>, AppError> {
        self.require_user(user_id).await?;

        Ok(StoryRepository::new(self.db).list_contributed_by(user_id).await?)
    }

    async fn require_user(&self, user_id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}
