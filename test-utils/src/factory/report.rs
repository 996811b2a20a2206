//! Report factory for creating test report entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a report against a story.
pub async fn create_report(
    db: &DatabaseConnection,
    story_id: i32,
    user_id: i32,
) -> Result<entity::report::Model, DbErr> {
    entity::report::ActiveModel {
        story_id: ActiveValue::Set(story_id),
        user_id: ActiveValue::Set(user_id),
        reason: ActiveValue::Set(Some("spam".to_string())),
        details: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
