//! Button labels, callback tags, and the transport-neutral reply type.

/// Reply-keyboard button labels shown to authenticated operators.
pub const BAN_STORY_BUTTON: &str = "🚫 Ban Story";
pub const WARN_USER_BUTTON: &str = "⚠️ Warn User";
pub const REPORTS_BUTTON: &str = "📋 Reports";
pub const MAIN_MENU_BUTTON: &str = "🏠 Main Menu";

/// Callback-data tags carried by inline report-listing buttons, in the form
/// `"<tag>:<target id>"`.
pub const BAN_STORY_CALLBACK: &str = "ban_story";
pub const BAN_USER_CALLBACK: &str = "ban_user";
pub const REQUEST_EDIT_CALLBACK: &str = "request_edit";

/// Keyboard attached to an outbound reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Leave whatever keyboard the chat currently shows.
    Unchanged,
    /// The main-menu reply keyboard.
    MainMenu,
    /// Remove the reply keyboard (free-text input steps).
    Remove,
    /// Inline action buttons as `(label, callback data)` pairs, one row each.
    Inline(Vec<(String, String)>),
}

/// One reply message from the console.
///
/// The console speaks in these instead of Telegram types so the whole
/// dialogue can be driven and asserted on in tests; the dispatcher glue in
/// `start` translates them into real messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Outbound {
    /// Plain text reply, keyboard untouched.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Unchanged,
        }
    }

    /// Reply carrying the main-menu keyboard.
    pub fn menu(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::MainMenu,
        }
    }

    /// Input prompt that removes the reply keyboard.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Remove,
        }
    }

    /// Reply with inline action buttons.
    pub fn inline(text: impl Into<String>, buttons: Vec<(String, String)>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Inline(buttons),
        }
    }
}
