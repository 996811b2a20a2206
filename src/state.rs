//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the HTTP layer. The state is initialized once during
//! startup and then cloned for each request handler through Axum's state
//! extraction. All fields are cheap to clone: the database connection is a pool
//! handle, the mailer is reference-counted, and the teloxide `Bot` clones an
//! inner `Arc`.

use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use teloxide::Bot;

use crate::{
    config::Config,
    service::{confirmation::ConfirmationCodeService, email::Mailer},
};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Outbound email gateway for confirmation codes.
    pub mailer: Arc<dyn Mailer>,

    /// Telegram bot handle used to push new-report notifications to the
    /// admin chats. The moderation console holds its own clone.
    pub bot: Bot,

    /// In-memory store of pending email confirmation codes.
    pub confirmation_codes: ConfirmationCodeService,

    /// Secret used to sign and verify bearer tokens.
    pub jwt_secret: String,

    /// Public base URL, used to build links to uploaded files.
    pub app_url: String,

    /// Directory uploaded files are written to.
    pub upload_dir: PathBuf,

    /// Allow-listed Telegram chat ids that receive report notifications.
    pub admin_chat_ids: Vec<i64>,
}

impl AppState {
    /// Creates the application state from initialized dependencies.
    pub fn new(
        db: DatabaseConnection,
        mailer: Arc<dyn Mailer>,
        bot: Bot,
        confirmation_codes: ConfirmationCodeService,
        config: &Config,
    ) -> Self {
        Self {
            db,
            mailer,
            bot,
            confirmation_codes,
            jwt_secret: config.jwt_secret.clone(),
            app_url: config.app_url.clone(),
            upload_dir: PathBuf::from(&config.upload_dir),
            admin_chat_ids: config.admin_chat_ids.clone(),
        }
    }
}
