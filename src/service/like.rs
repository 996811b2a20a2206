//! Like service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::{like::LikeRepository, statistics::StatisticsRepository, story::StoryRepository},
    error::AppError,
};

/// Service providing business logic for story likes.
pub struct LikeService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> LikeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Toggles a user's like on a story.
    ///
    /// The story owner's received-likes counter moves with the toggle.
    ///
    /// # Returns
    /// - `Ok(true)` - The story is now liked by the user
    /// - `Ok(false)` - An existing like was removed
    /// - `Err(AppError::NotFound)` - No story with that id
    pub async fn toggle(&self, story_id: i32, user_id: i32) -> Result<bool, AppError> {
        let story = StoryRepository::new(self.db)
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;

        let like_repo = LikeRepository::new(self.db);
        let statistics = StatisticsRepository::new(self.db);

        match like_repo.find_by_story_and_user(story_id, user_id).await? {
            Some(like) => {
                like_repo.delete(like).await?;
                statistics.adjust_likes_received(story.owner_id, -1).await?;
                Ok(false)
            }
            None => {
                like_repo.insert(story_id, user_id).await?;
                statistics.adjust_likes_received(story.owner_id, 1).await?;
                Ok(true)
            }
        }
    }

    /// Reports whether a user currently likes a story.
    pub async fn status(&self, story_id: i32, user_id: i32) -> Result<bool, AppError> {
        let like = LikeRepository::new(self.db)
            .find_by_story_and_user(story_id, user_id)
            .await?;

        Ok(like.is_some())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Toggling twice likes and then unlikes, moving the owner's counter
    /// both ways.
    #[tokio::test]
    async fn toggle_round_trip_adjusts_owner_statistics() {
        let db = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::UserStatistics)
            .with_table(entity::prelude::Story)
            .with_table(entity::prelude::Like)
            .build()
            .await
            .unwrap()
            .db
            .unwrap();

        let owner = factory::create_user(&db).await.unwrap();
        let reader = factory::create_user(&db).await.unwrap();
        factory::create_statistics(&db, owner.id).await.unwrap();
        let story = factory::create_story(&db, owner.id).await.unwrap();

        let service = LikeService::new(&db);
        let stats = StatisticsRepository::new(&db);

        assert!(service.toggle(story.id, reader.id).await.unwrap());
        assert!(service.status(story.id, reader.id).await.unwrap());
        assert_eq!(stats.find_by_user(owner.id).await.unwrap().unwrap().likes_received, 1);

        assert!(!service.toggle(story.id, reader.id).await.unwrap());
        assert!(!service.status(story.id, reader.id).await.unwrap());
        assert_eq!(stats.find_by_user(owner.id).await.unwrap().unwrap().likes_received, 0);
    }

    /// Liking a missing story is a not-found error.
    #[tokio::test]
    async fn toggle_unknown_story_is_not_found() {
        let db = TestBuilder::new()
            .with_table(entity::prelude::User)
            .with_table(entity::prelude::UserStatistics)
            .with_table(entity::prelude::Story)
            .with_table(entity::prelude::Like)
            .build()
            .await
            .unwrap()
            .db
            .unwrap();

        let reader = factory::create_user(&db).await.unwrap();

        let result = LikeService::new(&db).toggle(999, reader.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
