//! Story domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    dto::{
        search::SearchResultsDto,
        story::{StoryCreateDto, StoryDetailDto, StorySummaryDto, StoryUpdateDto},
    },
    model::{story_part::StoryPart, user::User},
};

/// Story as shown in listings: entity fields plus owner, tag names, and
/// dependent-collection counts.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryOverview {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_public: bool,
    pub is_editable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: User,
    pub tags: Vec<String>,
    pub parts_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

impl StoryOverview {
    pub fn into_dto(self) -> StorySummaryDto {
        StorySummaryDto {
            id: self.id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            owner: self.owner.into_dto(),
            is_public: self.is_public,
            is_editable: self.is_editable,
            cover_image_url: self.cover_image_url.unwrap_or_default(),
            tags: self.tags,
            parts_count: self.parts_count,
            like_count: self.like_count,
            comment_count: self.comment_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Full story view with ordered parts and the distinct set of contributors.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryDetail {
    pub overview: StoryOverview,
    pub parts: Vec<StoryPart>,
    pub contributors: Vec<User>,
}

impl StoryDetail {
    pub fn into_dto(self) -> StoryDetailDto {
        StoryDetailDto {
            summary: self.overview.into_dto(),
            parts: self.parts.into_iter().map(StoryPart::into_dto).collect(),
            contributors: self.contributors.into_iter().map(User::into_dto).collect(),
        }
    }
}

/// Parameters for creating a story.
#[derive(Debug, Clone)]
pub struct CreateStoryParam {
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_public: bool,
    pub tags: Vec<String>,
    pub initial_content: Option<String>,
}

impl CreateStoryParam {
    pub fn from_dto(owner_id: i32, dto: StoryCreateDto) -> Self {
        Self {
            owner_id,
            title: dto.title.trim().to_string(),
            description: dto.description.map(|d| d.trim().to_string()),
            cover_image_url: dto.cover_image_url.map(|u| u.trim().to_string()),
            is_public: dto.is_public,
            tags: dto.tags.unwrap_or_default(),
            initial_content: dto
                .initial_content
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        }
    }
}

/// Parameters for a partial story update. `None` keeps the current value; a
/// present `tags` list replaces the story's tag set.
#[derive(Debug, Clone)]
pub struct UpdateStoryParam {
    pub story_id: i32,
    pub acting_user_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_public: Option<bool>,
    pub is_editable: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl UpdateStoryParam {
    pub fn from_dto(story_id: i32, acting_user_id: i32, dto: StoryUpdateDto) -> Self {
        Self {
            story_id,
            acting_user_id,
            title: dto.title,
            description: dto.description,
            cover_image_url: dto.cover_image_url,
            is_public: dto.is_public,
            is_editable: dto.is_editable,
            tags: dto.tags,
        }
    }
}

/// Normalizes a list of tag names: trimmed, lowercased, blanks dropped,
/// duplicates removed with first-occurrence order preserved.
pub fn normalize_tags(names: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for name in names {
        let name = name.trim().to_lowercase();
        if !name.is_empty() && !normalized.contains(&name) {
            normalized.push(name);
        }
    }
    normalized
}

/// Parameters for a story search.
#[derive(Debug, Clone)]
pub struct SearchParam {
    pub query: Option<String>,
    pub tags: Vec<String>,
    /// One-based page number.
    pub page: u64,
    pub page_size: u64,
    /// Private stories owned by this user are included in the results.
    pub viewer_id: Option<i32>,
}

impl SearchParam {
    const DEFAULT_PAGE_SIZE: u64 = 10;
    const MAX_PAGE_SIZE: u64 = 50;

    /// Builds a search from query parameters, clamping pagination to sane
    /// bounds and normalizing the comma-separated tag list.
    pub fn from_dto(dto: crate::dto::search::SearchQueryDto, viewer_id: Option<i32>) -> Self {
        let tags: Vec<String> = dto
            .tags
            .map(|raw| raw.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        let page = dto.page.unwrap_or(1).max(1);
        let page_size = match dto.page_size {
            Some(size) if (1..=Self::MAX_PAGE_SIZE).contains(&size) => size,
            _ => Self::DEFAULT_PAGE_SIZE,
        };

        Self {
            query: dto.query,
            tags: normalize_tags(&tags),
            page,
            page_size,
            viewer_id,
        }
    }
}

/// One page of search results with the total match count.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub results: Vec<StoryOverview>,
}

impl SearchResults {
    pub fn into_dto(self) -> SearchResultsDto {
        SearchResultsDto {
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            results: self
                .results
                .into_iter()
                .map(StoryOverview::into_dto)
                .collect(),
        }
    }
}
