use super::*;

use test_utils::factory;

/// End-to-end warn: select action, supply id, supply message.
///
/// Expected: exactly one email to the user and one confirmation naming them
#[tokio::test]
async fn full_warn_flow_emails_user() {
    let (console, db, mailer) = console().await;
    let user = factory::user::UserFactory::new(&db)
        .login("trouble")
        .email("trouble@example.com")
        .build()
        .await
        .unwrap();

    authenticate(&console, ADMIN_CHAT).await;

    let replies = console.handle_message(ADMIN_CHAT, WARN_USER_BUTTON).await;
    assert_single_text(&replies, "Please enter the user ID to warn:");

    let replies = console.handle_message(ADMIN_CHAT, &user.id.to_string()).await;
    assert!(replies[0].text.contains("warning message"));

    let replies = console.handle_message(ADMIN_CHAT, "Tone it down").await;
    assert_eq!(replies.len(), 1);
    assert!(replies[0].text.contains("User warned: trouble"));
    assert!(replies[0].text.contains("Tone it down"));
    assert!(!replies[0].text.contains("could not be notified"));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "trouble@example.com");
    assert!(sent[0].body.contains("Tone it down"));
}

/// Warning a user without an email address.
///
/// Expected: no send attempt, but the confirmation is still produced
#[tokio::test]
async fn warn_without_email_still_confirms() {
    let (console, db, mailer) = console().await;
    let user = factory::user::UserFactory::new(&db)
        .email("")
        .build()
        .await
        .unwrap();

    authenticate(&console, ADMIN_CHAT).await;
    console.handle_message(ADMIN_CHAT, WARN_USER_BUTTON).await;
    console.handle_message(ADMIN_CHAT, &user.id.to_string()).await;
    let replies = console.handle_message(ADMIN_CHAT, "Please behave").await;

    assert!(replies[0].text.contains("User warned"));
    assert!(replies[0].text.contains("could not be notified"));
    assert!(mailer.sent().is_empty());
}

/// Warning a nonexistent user id.
///
/// Expected: "not found" reply, pending action cleared
#[tokio::test]
async fn nonexistent_user_yields_not_found() {
    let (console, _db, mailer) = console().await;

    authenticate(&console, ADMIN_CHAT).await;
    console.handle_message(ADMIN_CHAT, WARN_USER_BUTTON).await;
    console.handle_message(ADMIN_CHAT, "555").await;
    let replies = console.handle_message(ADMIN_CHAT, "hello?").await;

    assert!(replies[0].text.contains("User 555 not found"));
    assert!(mailer.sent().is_empty());
}

/// Warning when the email gateway is down.
///
/// Expected: the flow completes and the failure is reported to the operator
#[tokio::test]
async fn warn_reports_send_failure() {
    let (console, db, _mailer) = failing_console().await;
    let user = factory::user::UserFactory::new(&db)
        .email("trouble@example.com")
        .build()
        .await
        .unwrap();

    authenticate(&console, ADMIN_CHAT).await;
    console.handle_message(ADMIN_CHAT, WARN_USER_BUTTON).await;
    console.handle_message(ADMIN_CHAT, &user.id.to_string()).await;
    let replies = console.handle_message(ADMIN_CHAT, "Final warning").await;

    assert!(replies[0].text.contains("User warned"));
    assert!(replies[0].text.contains("could not be notified"));
}
