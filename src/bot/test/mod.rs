use std::sync::Arc;

use sea_orm::DatabaseConnection;
use test_utils::builder::TestBuilder;

use crate::{
    bot::{
        console::Console,
        menu::{
            Keyboard, Outbound, BAN_STORY_BUTTON, MAIN_MENU_BUTTON, REPORTS_BUTTON,
            WARN_USER_BUTTON,
        },
    },
    service::email::test_support::RecordingMailer,
};

mod auth;
mod navigation;
mod reports;
mod warn_user;

const PASSWORD: &str = "correct horse battery staple";
const ADMIN_CHAT: i64 = 1001;
const OTHER_ADMIN_CHAT: i64 = 1002;
const STRANGER_CHAT: i64 = 4004;

/// Builds a console over a fresh in-memory database with a recording mailer.
async fn console() -> (Console, DatabaseConnection, Arc<RecordingMailer>) {
    console_with_mailer(Arc::new(RecordingMailer::new())).await
}

/// Same as `console`, but every email send fails.
async fn failing_console() -> (Console, DatabaseConnection, Arc<RecordingMailer>) {
    console_with_mailer(Arc::new(RecordingMailer::failing())).await
}

async fn console_with_mailer(
    mailer: Arc<RecordingMailer>,
) -> (Console, DatabaseConnection, Arc<RecordingMailer>) {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserProfile)
        .with_table(entity::prelude::UserStatistics)
        .with_table(entity::prelude::Story)
        .with_table(entity::prelude::StoryPart)
        .with_table(entity::prelude::Tag)
        .with_table(entity::prelude::StoryTag)
        .with_table(entity::prelude::Like)
        .with_table(entity::prelude::Comment)
        .with_table(entity::prelude::Report)
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    let console = Console::new(
        db.clone(),
        mailer.clone(),
        PASSWORD.to_string(),
        vec![ADMIN_CHAT, OTHER_ADMIN_CHAT],
    );

    (console, db, mailer)
}

/// Authenticates the given chat and swallows the menu reply.
async fn authenticate(console: &Console, chat_id: i64) {
    let replies = console.handle_message(chat_id, PASSWORD).await;
    assert_menu(&replies);
}

fn assert_single_text(replies: &[Outbound], expected: &str) {
    assert_eq!(replies.len(), 1, "expected exactly one reply: {:?}", replies);
    assert_eq!(replies[0].text, expected);
}

fn assert_menu(replies: &[Outbound]) {
    assert_eq!(replies.len(), 1, "expected exactly one reply: {:?}", replies);
    assert_eq!(replies[0].keyboard, Keyboard::MainMenu);
}
