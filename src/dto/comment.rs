use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::user::UserDto;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommentCreateDto {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: UserDto,
}
