//! Story part domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{dto::story_part::StoryPartDto, model::user::User};

/// A single part of a story with its author attached.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryPart {
    pub id: i32,
    pub content: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: User,
}

impl StoryPart {
    pub fn from_entities(part: entity::story_part::Model, author: entity::user::Model) -> Self {
        Self {
            id: part.id,
            content: part.content,
            position: part.position,
            created_at: part.created_at,
            updated_at: part.updated_at,
            author: User::from_entity(author),
        }
    }

    pub fn into_dto(self) -> StoryPartDto {
        StoryPartDto {
            id: self.id,
            content: self.content,
            position: self.position,
            created_at: self.created_at,
            updated_at: self.updated_at,
            author: self.author.into_dto(),
        }
    }
}

/// Parameters for appending a part to a story.
#[derive(Debug, Clone)]
pub struct AddPartParam {
    pub story_id: i32,
    pub author_id: i32,
    pub content: String,
}

/// Parameters for editing a part's content.
#[derive(Debug, Clone)]
pub struct UpdatePartParam {
    pub story_id: i32,
    pub part_id: i32,
    pub acting_user_id: i32,
    pub content: String,
}

/// Parameters for removing a part.
#[derive(Debug, Clone)]
pub struct DeletePartParam {
    pub story_id: i32,
    pub part_id: i32,
    pub acting_user_id: i32,
}

/// Parameters for reordering a story's parts.
///
/// `part_ids` must be a permutation of the story's current part ids; the
/// service rejects anything else without touching the database.
#[derive(Debug, Clone)]
pub struct ReorderPartsParam {
    pub story_id: i32,
    pub acting_user_id: i32,
    pub part_ids: Vec<i32>,
}
