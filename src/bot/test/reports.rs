use super::*;

use sea_orm::EntityTrait;
use test_utils::factory;

/// Tests the empty report listing.
#[tokio::test]
async fn empty_listing_says_so() {
    let (console, _db, _mailer) = console().await;

    authenticate(&console, ADMIN_CHAT).await;

    let replies = console.handle_message(ADMIN_CHAT, REPORTS_BUTTON).await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, "No reports.");
}

/// Tests the listing format and inline actions.
///
/// Expected: one message per report carrying story/author/reporter context
/// and the three callback buttons
#[tokio::test]
async fn listing_renders_summary_with_actions() {
    let (console, db, _mailer) = console().await;
    let owner = factory::user::UserFactory::new(&db)
        .login("author")
        .build()
        .await
        .unwrap();
    let reporter = factory::user::UserFactory::new(&db)
        .login("watcher")
        .build()
        .await
        .unwrap();
    let story = factory::create_story(&db, owner.id).await.unwrap();
    factory::create_report(&db, story.id, reporter.id).await.unwrap();

    authenticate(&console, ADMIN_CHAT).await;

    let replies = console.handle_message(ADMIN_CHAT, REPORTS_BUTTON).await;
    assert_eq!(replies.len(), 1);

    let reply = &replies[0];
    assert!(reply.text.contains(&story.title));
    assert!(reply.text.contains("author"));
    assert!(reply.text.contains("watcher"));
    assert!(reply.text.contains("spam"));

    let Keyboard::Inline(buttons) = &reply.keyboard else {
        panic!("expected inline keyboard, got {:?}", reply.keyboard);
    };
    let data: Vec<&str> = buttons.iter().map(|(_, d)| d.as_str()).collect();
    assert!(data.contains(&format!("ban_story:{}", story.id).as_str()));
    assert!(data.contains(&format!("ban_user:{}", owner.id).as_str()));
    assert!(data.contains(&format!("request_edit:{}", story.id).as_str()));
}

/// Tests the listing cap of ten reports.
#[tokio::test]
async fn listing_is_capped_at_ten() {
    let (console, db, _mailer) = console().await;
    let owner = factory::create_user(&db).await.unwrap();
    let story = factory::create_story(&db, owner.id).await.unwrap();

    for _ in 0..12 {
        let reporter = factory::create_user(&db).await.unwrap();
        factory::create_report(&db, story.id, reporter.id).await.unwrap();
    }

    authenticate(&console, ADMIN_CHAT).await;

    let replies = console.handle_message(ADMIN_CHAT, REPORTS_BUTTON).await;
    assert_eq!(replies.len(), 10);
}

/// Tests that the listing is read-only: the chat stays Idle.
///
/// Expected: a ban flow can start normally right after listing
#[tokio::test]
async fn listing_leaves_chat_idle() {
    let (console, db, _mailer) = console().await;
    let owner = factory::create_user(&db).await.unwrap();
    let story = factory::create_story(&db, owner.id).await.unwrap();
    factory::create_report(&db, story.id, owner.id).await.unwrap();

    authenticate(&console, ADMIN_CHAT).await;
    console.handle_message(ADMIN_CHAT, REPORTS_BUTTON).await;

    let replies = console.handle_message(ADMIN_CHAT, BAN_STORY_BUTTON).await;
    assert_single_text(&replies, "Please enter the story ID to ban:");
}

/// Tests the ban-story inline action: jumps straight to the reason step.
///
/// Expected: reason prompt, then the reason completes the ban
#[tokio::test]
async fn ban_callback_jumps_to_reason() {
    let (console, db, _mailer) = console().await;
    let owner = factory::create_user(&db).await.unwrap();
    let story = factory::create_story(&db, owner.id).await.unwrap();

    authenticate(&console, ADMIN_CHAT).await;

    let replies = console
        .handle_callback(ADMIN_CHAT, &format!("ban_story:{}", story.id))
        .await;
    assert!(replies[0].text.contains("reason for banning story"));

    let replies = console.handle_message(ADMIN_CHAT, "reported content").await;
    assert!(replies[0].text.contains("Story deleted"));
    assert!(entity::prelude::Story::find_by_id(story.id)
        .one(&db)
        .await
        .unwrap()
        .is_none());
}

/// Tests the request-edit inline action.
///
/// Expected: immediate confirmation and one email to the owner
#[tokio::test]
async fn request_edit_callback_notifies_owner() {
    let (console, db, mailer) = console().await;
    let owner = factory::user::UserFactory::new(&db)
        .email("owner@example.com")
        .build()
        .await
        .unwrap();
    let story = factory::create_story(&db, owner.id).await.unwrap();

    authenticate(&console, ADMIN_CHAT).await;

    let replies = console
        .handle_callback(ADMIN_CHAT, &format!("request_edit:{}", story.id))
        .await;
    assert_eq!(replies.len(), 1);
    assert!(replies[0].text.contains("Edit requested"));
    assert!(replies[0].text.contains(&story.title));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "owner@example.com");

    // The story itself is untouched.
    assert!(entity::prelude::Story::find_by_id(story.id)
        .one(&db)
        .await
        .unwrap()
        .is_some());
}
