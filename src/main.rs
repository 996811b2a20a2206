mod bot;
mod config;
mod controller;
mod data;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use teloxide::Bot;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    service::{
        confirmation::ConfirmationCodeService,
        email::{Mailer, SmtpMailer},
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "storyweave=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::prepare_upload_dir(&config).await?;

    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::from_config(&config)?);
    let bot = Bot::new(config.bot_token.clone());

    // The moderation console runs as its own background task; the HTTP
    // server only holds a bot handle for report notifications.
    let console = bot::console::Console::new(
        db.clone(),
        mailer.clone(),
        config.admin_password.clone(),
        config.admin_chat_ids.clone(),
    );
    let console_bot = bot.clone();
    tokio::spawn(async move {
        bot::start::run(console_bot, console).await;
    });

    let state = AppState::new(db, mailer, bot, ConfirmationCodeService::new(), &config);
    let app = router::router(&state.upload_dir).with_state(state);

    tracing::info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
