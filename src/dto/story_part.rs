use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::user::UserDto;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StoryPartCreateDto {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StoryPartUpdateDto {
    pub content: String,
}

/// Full permutation of a story's part ids, first to last.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReorderPartsDto {
    pub part_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoryPartDto {
    pub id: i32,
    pub content: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: UserDto,
}
