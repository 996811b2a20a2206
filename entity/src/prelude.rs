pub use super::comment::Entity as Comment;
pub use super::like::Entity as Like;
pub use super::report::Entity as Report;
pub use super::story::Entity as Story;
pub use super::story_part::Entity as StoryPart;
pub use super::story_tag::Entity as StoryTag;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
pub use super::user_profile::Entity as UserProfile;
pub use super::user_statistics::Entity as UserStatistics;
