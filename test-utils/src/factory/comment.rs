//! Comment factory for creating test comment entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on a story.
pub async fn create_comment(
    db: &DatabaseConnection,
    story_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        story_id: ActiveValue::Set(story_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set("A comment".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
