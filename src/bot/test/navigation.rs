use super::*;

use sea_orm::EntityTrait;
use test_utils::factory;

/// Tests that "Main Menu" aborts a pending dialogue.
///
/// Expected: after the abort, a number is Idle chatter, not a target id
#[tokio::test]
async fn main_menu_aborts_pending_action() {
    let (console, db, _mailer) = console().await;
    let owner = factory::create_user(&db).await.unwrap();
    let story = factory::create_story(&db, owner.id).await.unwrap();

    authenticate(&console, ADMIN_CHAT).await;
    console.handle_message(ADMIN_CHAT, BAN_STORY_BUTTON).await;

    let replies = console.handle_message(ADMIN_CHAT, MAIN_MENU_BUTTON).await;
    assert_menu(&replies);

    // The story id no longer means anything; the story survives.
    let replies = console
        .handle_message(ADMIN_CHAT, &story.id.to_string())
        .await;
    assert_menu(&replies);
    assert!(entity::prelude::Story::find_by_id(story.id)
        .one(&db)
        .await
        .unwrap()
        .is_some());
}

/// Tests that "Main Menu" also aborts from the reason step.
#[tokio::test]
async fn main_menu_aborts_awaiting_reason() {
    let (console, db, _mailer) = console().await;
    let owner = factory::create_user(&db).await.unwrap();
    let story = factory::create_story(&db, owner.id).await.unwrap();

    authenticate(&console, ADMIN_CHAT).await;
    console.handle_message(ADMIN_CHAT, BAN_STORY_BUTTON).await;
    console
        .handle_message(ADMIN_CHAT, &story.id.to_string())
        .await;

    let replies = console.handle_message(ADMIN_CHAT, MAIN_MENU_BUTTON).await;
    assert_menu(&replies);

    // What would have been the reason is now Idle chatter.
    let replies = console.handle_message(ADMIN_CHAT, "spam content").await;
    assert_menu(&replies);
    assert!(entity::prelude::Story::find_by_id(story.id)
        .one(&db)
        .await
        .unwrap()
        .is_some());
}

/// Tests that unknown Idle text falls back to the menu.
///
/// Expected: exactly one menu reply, never silence
#[tokio::test]
async fn unknown_idle_text_shows_menu() {
    let (console, _db, _mailer) = console().await;

    authenticate(&console, ADMIN_CHAT).await;

    let replies = console.handle_message(ADMIN_CHAT, "what do I do?").await;
    assert_menu(&replies);
}

/// Tests that callbacks from an unauthenticated chat are rejected.
///
/// Expected: password prompt, no state change
#[tokio::test]
async fn callbacks_require_authentication() {
    let (console, _db, _mailer) = console().await;

    let replies = console.handle_callback(STRANGER_CHAT, "ban_story:1").await;
    assert_single_text(&replies, "Please enter the admin password:");
}

/// Tests that malformed callback data is dropped to the menu.
#[tokio::test]
async fn malformed_callback_shows_menu() {
    let (console, _db, _mailer) = console().await;

    authenticate(&console, ADMIN_CHAT).await;

    let replies = console.handle_callback(ADMIN_CHAT, "ban_story").await;
    assert_menu(&replies);

    let replies = console.handle_callback(ADMIN_CHAT, "ban_story:abc").await;
    assert_menu(&replies);
}

/// Tests that dialogues in different chats do not interfere.
///
/// Expected: each operator's pending action advances independently
#[tokio::test]
async fn chats_keep_independent_dialogues() {
    let (console, db, _mailer) = console().await;
    let owner = factory::create_user(&db).await.unwrap();
    let story = factory::create_story(&db, owner.id).await.unwrap();

    authenticate(&console, ADMIN_CHAT).await;
    authenticate(&console, OTHER_ADMIN_CHAT).await;

    console.handle_message(ADMIN_CHAT, BAN_STORY_BUTTON).await;

    // The second operator is still Idle; a number is chatter for them.
    let replies = console
        .handle_message(OTHER_ADMIN_CHAT, &story.id.to_string())
        .await;
    assert_menu(&replies);

    // The first operator's dialogue continues where it was.
    let replies = console
        .handle_message(ADMIN_CHAT, &story.id.to_string())
        .await;
    assert!(replies[0].text.contains("reason for banning story"));
}
