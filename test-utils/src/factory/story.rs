//! Story factory for creating test story entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test stories with customizable fields.
pub struct StoryFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    title: String,
    description: Option<String>,
    is_public: bool,
    is_editable: bool,
}

impl<'a> StoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            title: format!("Story {}", next_id()),
            description: None,
            is_public: true,
            is_editable: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn editable(mut self, is_editable: bool) -> Self {
        self.is_editable = is_editable;
        self
    }

    /// Builds and inserts the story entity into the database.
    pub async fn build(self) -> Result<entity::story::Model, DbErr> {
        let now = Utc::now();
        entity::story::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            cover_image_url: ActiveValue::Set(None),
            is_public: ActiveValue::Set(self.is_public),
            is_editable: ActiveValue::Set(self.is_editable),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public, editable story with default values.
pub async fn create_story(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::story::Model, DbErr> {
    StoryFactory::new(db, owner_id).build().await
}
