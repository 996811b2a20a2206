//! Tag factory for creating tags and story-tag links.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::factory::helpers::next_id;

/// Creates a tag with a unique generated name.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    create_tag_with_name(db, format!("tag{}", next_id())).await
}

/// Creates a tag with an explicit name.
pub async fn create_tag_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a story to a tag.
pub async fn link_tag(db: &DatabaseConnection, story_id: i32, tag_id: i32) -> Result<(), DbErr> {
    entity::prelude::StoryTag::insert(entity::story_tag::ActiveModel {
        story_id: ActiveValue::Set(story_id),
        tag_id: ActiveValue::Set(tag_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}
