use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::{story_part::StoryPartDto, user::UserDto};

/// Story creation payload.
///
/// `initial_content`, when present and non-blank, becomes the story's first
/// part. Tag names are normalized server-side (trimmed, lowercased, deduped).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StoryCreateDto {
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    pub tags: Option<Vec<String>>,
    pub initial_content: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Partial story update; absent fields keep their current value. A present
/// `tags` list replaces the story's tag set.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StoryUpdateDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_public: Option<bool>,
    pub is_editable: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Story as it appears in listings and search results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StorySummaryDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub owner: UserDto,
    pub is_public: bool,
    pub is_editable: bool,
    pub cover_image_url: String,
    pub tags: Vec<String>,
    pub parts_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full story view with ordered parts and distinct contributors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoryDetailDto {
    #[serde(flatten)]
    pub summary: StorySummaryDto,
    pub parts: Vec<StoryPartDto>,
    pub contributors: Vec<UserDto>,
}
