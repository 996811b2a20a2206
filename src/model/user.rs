//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::user::{CurrentUserDto, ProfileDto, UserDto};

/// Public view of an account. The password hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            login: entity.login,
            email: entity.email,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            login: self.login,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// The authenticated user's own account with profile fields attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i32,
    pub login: String,
    pub email: String,
    pub description: String,
    pub profile_image: String,
}

impl CurrentUser {
    pub fn from_entities(
        user: entity::user::Model,
        profile: Option<entity::user_profile::Model>,
    ) -> Self {
        let (description, profile_image) = profile
            .map(|p| (p.description, p.profile_image))
            .unwrap_or_default();

        Self {
            id: user.id,
            login: user.login,
            email: user.email,
            description,
            profile_image,
        }
    }

    pub fn into_dto(self) -> CurrentUserDto {
        CurrentUserDto {
            id: self.id,
            login: self.login,
            email: self.email,
            description: self.description,
            profile_image: self.profile_image,
        }
    }
}

/// A user's public profile page: profile data plus contribution statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
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

impl Profile {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            login: self.login,
            description: self.description,
            profile_image: self.profile_image,
            stories_started: self.stories_started,
            stories_contributed: self.stories_contributed,
            likes_received: self.likes_received,
            comments_received: self.comments_received,
            is_current_user: self.is_current_user,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub login: String,
    pub email: String,
    pub password: String,
}

/// Parameters for inserting a user row. The password has already been hashed
/// by the service layer.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub login: String,
    pub email: String,
    pub password_hash: String,
}

/// Parameters for a login attempt.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub login: String,
    pub password: String,
}

/// Parameters for a partial profile update. `None` keeps the current value.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub user_id: i32,
    pub description: Option<String>,
    pub profile_image: Option<String>,
}

/// Parameters for a partial account update. `None` keeps the current value.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub user_id: i32,
    pub login: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub profile_image: Option<String>,
}
