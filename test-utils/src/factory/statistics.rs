//! Statistics factory for creating zeroed user statistics rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a zeroed statistics row for a user.
pub async fn create_statistics(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::user_statistics::Model, DbErr> {
    entity::user_statistics::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        stories_started: ActiveValue::Set(0),
        stories_contributed: ActiveValue::Set(0),
        likes_received: ActiveValue::Set(0),
        comments_received: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}
