//! Story part service for business logic.
//!
//! This module provides the `StoryPartService` for appending, editing,
//! removing, and reordering story parts while preserving the dense 1..N
//! position sequence and the author/owner permission rules.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        statistics::StatisticsRepository, story::StoryRepository,
        story_part::StoryPartRepository, user::UserRepository,
    },
    error::AppError,
    model::story_part::{
        AddPartParam, DeletePartParam, ReorderPartsParam, StoryPart, UpdatePartParam,
    },
};

/// Service providing business logic for story parts.
pub struct StoryPartService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> StoryPartService<'a> {
    /// Creates a new StoryPartService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StoryPartService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a part to a story.
    ///
    /// The story must exist and be editable; blank content is rejected. A
    /// contributor who is not the owner gets their contributed-stories
    /// counter bumped, and the story's `updated_at` is refreshed.
    ///
    /// # Arguments
    /// - `param` - Story id, author id, and content
    ///
    /// # Returns
    /// - `Ok(StoryPart)` - The created part with its author
    /// - `Err(AppError::NotFound)` - No story with that id
    /// - `Err(AppError::BadRequest)` - Story not editable or blank content
    pub async fn add(&self, param: AddPartParam) -> Result<StoryPart, AppError> {
        let story = StoryRepository::new(self.db)
            .find_by_id(param.story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;

        if !story.is_editable {
            return Err(AppError::BadRequest(
                "This story is not currently editable".to_string(),
            ));
        }

        let content = param.content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::BadRequest(
                "Part content cannot be empty".to_string(),
            ));
        }

        let author = UserRepository::new(self.db)
            .find_by_id(param.author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let part = StoryPartRepository::new(self.db)
            .add(AddPartParam {
                story_id: param.story_id,
                author_id: param.author_id,
                content,
            })
            .await?;

        if story.owner_id != param.author_id {
            StatisticsRepository::new(self.db)
                .increment_stories_contributed(param.author_id)
                .await?;
        }

        StoryRepository::new(self.db).touch(story.id).await?;

        Ok(StoryPart::from_entities(part, author))
    }

    /// Gets a single part, enforcing the story's visibility.
    pub async fn get(
        &self,
        story_id: i32,
        part_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<StoryPart, AppError> {
        let story = StoryRepository::new(self.db)
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;

        if !story.is_public && viewer_id != Some(story.owner_id) {
            return Err(AppError::Forbidden(
                "You don't have access to this story part".to_string(),
            ));
        }

        let (part, author) = StoryPartRepository::new(self.db)
            .find_with_author(story_id, part_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Part not found".to_string()))?;

        Ok(StoryPart::from_entities(part, author))
    }

    /// Replaces a part's content. Part author or story owner only.
    pub async fn update(&self, param: UpdatePartParam) -> Result<StoryPart, AppError> {
        let (story, part, author) = self.find_for_edit(param.story_id, param.part_id).await?;

        if part.author_id != param.acting_user_id && story.owner_id != param.acting_user_id {
            return Err(AppError::Forbidden(
                "Only the part author or story owner can edit a part".to_string(),
            ));
        }

        let content = param.content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::BadRequest(
                "Part content cannot be empty".to_string(),
            ));
        }

        let part = StoryPartRepository::new(self.db)
            .update_content(part, content)
            .await?;

        StoryRepository::new(self.db).touch(story.id).await?;

        Ok(StoryPart::from_entities(part, author))
    }

    /// Removes a part and renumbers the ones after it. Part author or story
    /// owner only.
    pub async fn delete(&self, param: DeletePartParam) -> Result<(), AppError> {
        let (story, part, _) = self.find_for_edit(param.story_id, param.part_id).await?;

        if part.author_id != param.acting_user_id && story.owner_id != param.acting_user_id {
            return Err(AppError::Forbidden(
                "Only the part author or story owner can delete a part".to_string(),
            ));
        }

        StoryPartRepository::new(self.db).delete_and_close_gap(part).await?;
        StoryRepository::new(self.db).touch(story.id).await?;

        Ok(())
    }

    /// Reorders a story's parts. Owner only.
    ///
    /// The supplied ids must be exactly the story's current part ids with no
    /// duplicates or omissions; anything else is rejected before any position
    /// is written, so the sequence is either fully rewritten or untouched.
    ///
    /// # Arguments
    /// - `param` - Story id, acting user, and the full new id order
    ///
    /// # Returns
    /// - `Ok(())` - Sequence rewritten to 1..N in the given order
    /// - `Err(AppError::NotFound)` - No story with that id
    /// - `Err(AppError::Forbidden)` - Acting user is not the owner
    /// - `Err(AppError::BadRequest)` - Ids are not a permutation of the story's parts
    pub async fn reorder(&self, param: ReorderPartsParam) -> Result<(), AppError> {
        let story = StoryRepository::new(self.db)
            .find_by_id(param.story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;

        if story.owner_id != param.acting_user_id {
            return Err(AppError::Forbidden(
                "Only the owner can reorder story parts".to_string(),
            ));
        }

        let part_repo = StoryPartRepository::new(self.db);
        let existing: HashSet<i32> = part_repo
            .list_for_story(param.story_id)
            .await?
            .into_iter()
            .map(|part| part.id)
            .collect();

        let supplied: HashSet<i32> = param.part_ids.iter().copied().collect();

        if supplied.len() != param.part_ids.len() {
            return Err(AppError::BadRequest(
                "Part ids contain duplicates".to_string(),
            ));
        }
        if supplied != existing {
            return Err(AppError::BadRequest(
                "Part ids do not match the story's parts".to_string(),
            ));
        }

        part_repo.reorder(param.story_id, &param.part_ids).await?;
        StoryRepository::new(self.db).touch(story.id).await?;

        Ok(())
    }

    async fn find_for_edit(
        &self,
        story_id: i32,
        part_id: i32,
    ) -> Result<
        (
            entity::story::Model,
            entity::story_part::Model,
            entity::user::Model,
        ),
        AppError,
    > {
        let story = StoryRepository::new(self.db)
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;

        let (part, author) = StoryPartRepository::new(self.db)
            .find_with_author(story_id, part_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Part not found".to_string()))?;

        Ok((story, part, author))
    }
}
