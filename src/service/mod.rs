//! Business logic layer between controllers and repositories.
//!
//! Services validate operation parameters, enforce ownership and visibility
//! rules, orchestrate repository calls, and keep the user statistics counters
//! in step with content changes. They work with domain models; DTO conversion
//! stays at the controller boundary.

pub mod auth;
pub mod comment;
pub mod confirmation;
pub mod email;
pub mod like;
pub mod moderation;
pub mod report;
pub mod story;
pub mod story_part;
pub mod user;
