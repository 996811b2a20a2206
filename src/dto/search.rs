use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::story::StorySummaryDto;

/// Search query parameters. `tags` is a comma-separated list so it can be
/// carried in a single query-string key.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchQueryDto {
    pub query: Option<String>,
    pub tags: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultsDto {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub results: Vec<StorySummaryDto>,
}
