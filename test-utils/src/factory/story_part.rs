//! Story part factory for creating test part entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a part at the given position.
pub async fn create_part(
    db: &DatabaseConnection,
    story_id: i32,
    author_id: i32,
    position: i32,
) -> Result<entity::story_part::Model, DbErr> {
    create_part_with_content(db, story_id, author_id, position, format!("Part {}", position))
        .await
}

/// Creates a part at the given position with explicit content.
pub async fn create_part_with_content(
    db: &DatabaseConnection,
    story_id: i32,
    author_id: i32,
    position: i32,
    content: impl Into<String>,
) -> Result<entity::story_part::Model, DbErr> {
    let now = Utc::now();
    entity::story_part::ActiveModel {
        story_id: ActiveValue::Set(story_id),
        author_id: ActiveValue::Set(author_id),
        content: ActiveValue::Set(content.into()),
        position: ActiveValue::Set(position),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
