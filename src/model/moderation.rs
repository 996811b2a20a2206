//! Moderation action parameters and outcomes.

/// Parameters for removing a story through the moderation console.
#[derive(Debug, Clone)]
pub struct BanStoryParam {
    pub story_id: i32,
    pub reason: String,
}

/// Parameters for warning a user through the moderation console.
#[derive(Debug, Clone)]
pub struct WarnUserParam {
    pub user_id: i32,
    pub message: String,
}

/// Result of a completed story ban.
///
/// `owner_notified` reflects the best-effort email only; the deletion itself
/// has already committed by the time this value exists.
#[derive(Debug, Clone, PartialEq)]
pub struct BanOutcome {
    pub story_id: i32,
    pub title: String,
    pub owner_login: String,
    pub reason: String,
    pub owner_notified: bool,
}

/// Result of a completed user warning.
#[derive(Debug, Clone, PartialEq)]
pub struct WarnOutcome {
    pub user_id: i32,
    pub login: String,
    pub message: String,
    pub email_sent: bool,
}

/// Result of asking a story's owner to edit it.
#[derive(Debug, Clone, PartialEq)]
pub struct EditRequestOutcome {
    pub story_id: i32,
    pub title: String,
    pub owner_login: String,
    pub email_sent: bool,
}
