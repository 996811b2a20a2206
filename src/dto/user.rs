use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub login: String,
    pub email: String,
    pub password: String,
}

/// Login payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginDto {
    pub login: String,
    pub password: String,
}

/// Public user representation embedded in stories, parts, and comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// The authenticated user's own view, with profile fields inlined.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserDto {
    pub id: i32,
    pub login: String,
    pub email: String,
    pub description: String,
    pub profile_image: String,
}

/// Successful login response: a bearer token plus the user it names.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub token: String,
    pub user: CurrentUserDto,
}

/// Public profile page: profile data, statistics, and ownership marker.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub login: String,
    pub description: String,
    pub profile_image: String,
    pub stories_started: i32,
    pub stories_contributed: i32,
    pub likes_received: i32,
    pub comments_received: i32,
    pub is_current_user: bool,
}

/// Partial profile update; absent fields keep their current value.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProfileUpdateDto {
    pub description: Option<String>,
    pub profile_image: Option<String>,
}

/// Partial account update; absent fields keep their current value.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserUpdateDto {
    pub login: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub profile_image: Option<String>,
}
