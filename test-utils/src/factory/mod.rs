//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Factories automatically generate unique
//! logins and emails so tests can create several rows without colliding on the
//! schema's unique constraints.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let story = factory::story::create_story(&db, user.id).await?;
//! let part = factory::story_part::create_part(&db, story.id, user.id, 1).await?;
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .login("custom")
//!     .email("custom@example.com")
//!     .build()
//!     .await?;
//!
//! let story = factory::story::StoryFactory::new(&db, user.id)
//!     .title("Custom title")
//!     .public(false)
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod helpers;
pub mod like;
pub mod report;
pub mod statistics;
pub mod story;
pub mod story_part;
pub mod tag;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use comment::create_comment;
pub use like::create_like;
pub use report::create_report;
pub use statistics::create_statistics;
pub use story::create_story;
pub use story_part::{create_part, create_part_with_content};
pub use tag::{create_tag, link_tag};
pub use user::create_user;
