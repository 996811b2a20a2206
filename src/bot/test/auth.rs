use super::*;

/// Tests that a never-seen chat gets a password prompt for any first message.
///
/// Expected: re-prompt, and the chat stays unauthenticated (menu buttons do
/// nothing but re-prompt)
#[tokio::test]
async fn first_message_prompts_for_password() {
    let (console, _db, _mailer) = console().await;

    let replies = console.handle_message(ADMIN_CHAT, "hello").await;
    assert_single_text(&replies, "Please enter the admin password:");

    // Still unauthenticated: a menu button is just another wrong password.
    let replies = console.handle_message(ADMIN_CHAT, BAN_STORY_BUTTON).await;
    assert_single_text(&replies, "Please enter the admin password:");
}

/// Tests the full authentication gate: secret AND allow-list required.
///
/// Expected: wrong password from an allow-listed chat re-prompts; the right
/// password from a non-allow-listed chat re-prompts; the right password from
/// an allow-listed chat yields exactly one main menu
#[tokio::test]
async fn requires_password_and_allow_list() {
    let (console, _db, _mailer) = console().await;

    let replies = console.handle_message(ADMIN_CHAT, "wrong password").await;
    assert_single_text(&replies, "Please enter the admin password:");

    let replies = console.handle_message(STRANGER_CHAT, PASSWORD).await;
    assert_single_text(&replies, "Please enter the admin password:");

    let replies = console.handle_message(ADMIN_CHAT, PASSWORD).await;
    assert_menu(&replies);
}

/// Tests that repeated correct submissions stay idempotent.
///
/// Expected: each message yields exactly one menu, never a queue of them
#[tokio::test]
async fn repeated_password_submissions_yield_one_menu_each() {
    let (console, _db, _mailer) = console().await;

    authenticate(&console, ADMIN_CHAT).await;

    // Already authenticated: the password is now just unknown text.
    let replies = console.handle_message(ADMIN_CHAT, PASSWORD).await;
    assert_menu(&replies);
}

/// Tests that authentication is per chat id.
///
/// Expected: one operator authenticating does not authenticate another chat
#[tokio::test]
async fn authentication_is_per_chat() {
    let (console, _db, _mailer) = console().await;

    authenticate(&console, ADMIN_CHAT).await;

    let replies = console.handle_message(OTHER_ADMIN_CHAT, "hello").await;
    assert_single_text(&replies, "Please enter the admin password:");
}
