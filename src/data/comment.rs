//! Comment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::model::comment::AddCommentParam;

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment on a story.
    pub async fn insert(&self, param: AddCommentParam) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            story_id: ActiveValue::Set(param.story_id),
            user_id: ActiveValue::Set(param.user_id),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a comment by id, scoped to a story, with its author.
    pub async fn find_with_author(
        &self,
        story_id: i32,
        comment_id: i32,
    ) -> Result<Option<(entity::comment::Model, entity::user::Model)>, DbErr> {
        let Some((comment, author)) = entity::prelude::Comment::find_by_id(comment_id)
            .filter(entity::comment::Column::StoryId.eq(story_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let author = author.ok_or_else(|| {
            DbErr::RecordNotFound(format!("author of comment {} missing", comment.id))
        })?;

        Ok(Some((comment, author)))
    }

    /// Gets a story's comments with their authors, newest first.
    pub async fn list_for_story(
        &self,
        story_id: i32,
    ) -> Result<Vec<(entity::comment::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::StoryId.eq(story_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(comment, author)| {
                let author = author.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("author of comment {} missing", comment.id))
                })?;
                Ok((comment, author))
            })
            .collect()
    }

    /// Removes a comment.
    pub async fn delete(&self, comment: entity::comment::Model) -> Result<(), DbErr> {
        comment.delete(self.db).await?;
        Ok(())
    }
}
