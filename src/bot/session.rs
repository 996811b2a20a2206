//! Per-chat dialogue state for the moderation console.
//!
//! Every chat id maps to one `ChatState`. The state is a sum type rather than
//! string tags so an id can never be collected for an action kind that does
//! not exist, and a reason can never be collected without a target id.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

/// The moderation action a dialogue is collecting input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Remove a story and everything referencing it.
    BanStory,
    /// Send a warning email to a user.
    WarnUser,
}

/// Dialogue state of one operator chat.
///
/// `Unauthenticated → Idle → AwaitingTargetId → AwaitingReason → Idle`.
/// `Idle` is the resting state; any completed or aborted action returns to
/// it. There is no terminal state and no expiry of a stalled dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChatState {
    /// Never authenticated (or the process restarted). Initial state for any
    /// chat id not seen before.
    #[default]
    Unauthenticated,
    /// Authenticated, no action in progress.
    Idle,
    /// Waiting for the operator to supply a numeric target id.
    AwaitingTargetId(ActionKind),
    /// Waiting for the free-text reason or warning message.
    AwaitingReason { kind: ActionKind, target_id: i32 },
}

/// In-memory store of per-chat session state, owned by the console instance.
///
/// The outer lock only guards entry lookup and creation and is never held
/// across an await point. The returned per-chat lock is held for the whole
/// handling of one update: messages for the same chat serialize, messages for
/// different chats proceed concurrently.
pub struct SessionStore {
    sessions: Mutex<HashMap<i64, Arc<Mutex<ChatState>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Gets the state cell for a chat, creating an `Unauthenticated` entry for
    /// a chat id never seen before.
    pub async fn entry(&self, chat_id: i64) -> Arc<Mutex<ChatState>> {
        let mut sessions = self.sessions.lock().await;

        sessions
            .entry(chat_id)
            .or_insert_with(|| Arc::new(Mutex::new(ChatState::default())))
            .clone()
    }
}
