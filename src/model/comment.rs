//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{dto::comment::CommentDto, model::user::User};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: User,
}

impl Comment {
    pub fn from_entities(comment: entity::comment::Model, author: entity::user::Model) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            created_at: comment.created_at,
            author: User::from_entity(author),
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            content: self.content,
            created_at: self.created_at,
            author: self.author.into_dto(),
        }
    }
}

/// Parameters for adding a comment to a story.
#[derive(Debug, Clone)]
pub struct AddCommentParam {
    pub story_id: i32,
    pub user_id: i32,
    pub content: String,
}
