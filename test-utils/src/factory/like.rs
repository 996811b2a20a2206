//! Like factory for creating test like entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a like for a (story, user) pair.
pub async fn create_like(
    db: &DatabaseConnection,
    story_id: i32,
    user_id: i32,
) -> Result<entity::like::Model, DbErr> {
    entity::like::ActiveModel {
        story_id: ActiveValue::Set(story_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
