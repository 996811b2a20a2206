//! Like data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter,
};

pub struct LikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the like a user placed on a story, if any.
    pub async fn find_by_story_and_user(
        &self,
        story_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::like::Model>, DbErr> {
        entity::prelude::Like::find()
            .filter(entity::like::Column::StoryId.eq(story_id))
            .filter(entity::like::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Inserts a like for a (story, user) pair.
    pub async fn insert(&self, story_id: i32, user_id: i32) -> Result<entity::like::Model, DbErr> {
        entity::like::ActiveModel {
            story_id: ActiveValue::Set(story_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes an existing like.
    pub async fn delete(&self, like: entity::like::Model) -> Result<(), DbErr> {
        like.delete(self.db).await?;
        Ok(())
    }
}
