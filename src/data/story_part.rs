//! Story part data repository for database operations.
//!
//! Parts of a story form a dense position sequence 1..N. Every operation here
//! preserves that invariant: appends take the next free position, deletions
//! shift later parts down inside a transaction, and reorders rewrite the full
//! sequence inside a transaction.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::story_part::AddPartParam;

/// Repository providing database operations for story parts.
pub struct StoryPartRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoryPartRepository<'a> {
    /// Creates a new StoryPartRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StoryPartRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a part at the end of a story's sequence.
    ///
    /// The new part takes position `max + 1`, or 1 for a story without parts.
    ///
    /// # Arguments
    /// - `param` - Story id, author id, and part content
    ///
    /// # Returns
    /// - `Ok(Model)` - The created part row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add(&self, param: AddPartParam) -> Result<entity::story_part::Model, DbErr> {
        let last = entity::prelude::StoryPart::find()
            .filter(entity::story_part::Column::StoryId.eq(param.story_id))
            .order_by_desc(entity::story_part::Column::Position)
            .one(self.db)
            .await?;

        let position = last.map(|part| part.position + 1).unwrap_or(1);
        let now = Utc::now();

        entity::story_part::ActiveModel {
            story_id: ActiveValue::Set(param.story_id),
            author_id: ActiveValue::Set(param.author_id),
            content: ActiveValue::Set(param.content),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a part by id, scoped to a story.
    pub async fn find_in_story(
        &self,
        story_id: i32,
        part_id: i32,
    ) -> Result<Option<entity::story_part::Model>, DbErr> {
        entity::prelude::StoryPart::find_by_id(part_id)
            .filter(entity::story_part::Column::StoryId.eq(story_id))
            .one(self.db)
            .await
    }

    /// Finds a part with its author, scoped to a story.
    pub async fn find_with_author(
        &self,
        story_id: i32,
        part_id: i32,
    ) -> Result<Option<(entity::story_part::Model, entity::user::Model)>, DbErr> {
        let Some((part, author)) = entity::prelude::StoryPart::find_by_id(part_id)
            .filter(entity::story_part::Column::StoryId.eq(story_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let author = author.ok_or_else(|| {
            DbErr::RecordNotFound(format!("author of story part {} missing", part.id))
        })?;

        Ok(Some((part, author)))
    }

    /// Gets all parts of a story ordered by position.
    pub async fn list_for_story(
        &self,
        story_id: i32,
    ) -> Result<Vec<entity::story_part::Model>, DbErr> {
        entity::prelude::StoryPart::find()
            .filter(entity::story_part::Column::StoryId.eq(story_id))
            .order_by_asc(entity::story_part::Column::Position)
            .all(self.db)
            .await
    }

    /// Replaces a part's content and bumps its `updated_at`.
    pub async fn update_content(
        &self,
        part: entity::story_part::Model,
        content: String,
    ) -> Result<entity::story_part::Model, DbErr> {
        let mut active = part.into_active_model();
        active.content = ActiveValue::Set(content);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Deletes a part and closes the gap it leaves.
    ///
    /// All parts of the same story with a higher position shift down by one,
    /// so the remaining sequence stays a dense 1..N-1. Delete and shift share
    /// one transaction.
    ///
    /// # Arguments
    /// - `part` - The fetched part row to remove
    ///
    /// # Returns
    /// - `Ok(())` - Part removed and later parts renumbered
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete_and_close_gap(&self, part: entity::story_part::Model) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::StoryPart::delete_by_id(part.id).exec(&txn).await?;

        entity::prelude::StoryPart::update_many()
            .filter(entity::story_part::Column::StoryId.eq(part.story_id))
            .filter(entity::story_part::Column::Position.gt(part.position))
            .col_expr(
                entity::story_part::Column::Position,
                Expr::col(entity::story_part::Column::Position).sub(1),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Rewrites the position sequence of a story's parts.
    ///
    /// `part_ids` is the new order, first to last; the part at index `i` gets
    /// position `i + 1`. Callers must have validated that the ids are exactly
    /// the story's current part ids. All updates share one transaction.
    ///
    /// # Arguments
    /// - `story_id` - Story whose parts are reordered
    /// - `part_ids` - Part ids in their new order
    ///
    /// # Returns
    /// - `Ok(())` - All positions rewritten
    /// - `Err(DbErr)` - Database error; the transaction is rolled back and no
    ///   positions change
    pub async fn reorder(&self, story_id: i32, part_ids: &[i32]) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        for (index, part_id) in part_ids.iter().enumerate() {
            entity::prelude::StoryPart::update_many()
                .filter(entity::story_part::Column::Id.eq(*part_id))
                .filter(entity::story_part::Column::StoryId.eq(story_id))
                .col_expr(
                    entity::story_part::Column::Position,
                    Expr::value(index as i32 + 1),
                )
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }
}
