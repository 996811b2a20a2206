//! teloxide dispatcher glue for the moderation console.
//!
//! Feeds message and callback updates into the `Console` and translates its
//! transport-neutral replies into Telegram messages. Errors from individual
//! updates are logged by the dispatcher's error handler; one bad update never
//! stops the console. The built-in ctrl-c handler stops the update listener
//! on shutdown while in-flight handlers run to completion.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{
        InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
        KeyboardRemove, ReplyMarkup,
    },
};

use crate::bot::{
    console::Console,
    menu::{
        Keyboard, Outbound, BAN_STORY_BUTTON, MAIN_MENU_BUTTON, REPORTS_BUTTON, WARN_USER_BUTTON,
    },
};

/// Runs the console against the Telegram update feed until shutdown.
pub async fn run(bot: Bot, console: Console) {
    let console = Arc::new(console);

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    tracing::info!("Moderation console connected to Telegram");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![console])
        .default_handler(|update| async move {
            tracing::debug!("Unhandled Telegram update: {:?}", update);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Moderation console failed to handle update",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn handle_message(
    bot: Bot,
    console: Arc<Console>,
    message: Message,
) -> Result<(), teloxide::RequestError> {
    let Some(text) = message.text() else {
        return Ok(());
    };

    let replies = console.handle_message(message.chat.id.0, text).await;
    send_replies(&bot, message.chat.id, replies).await
}

async fn handle_callback(
    bot: Bot,
    console: Arc<Console>,
    query: CallbackQuery,
) -> Result<(), teloxide::RequestError> {
    bot.answer_callback_query(query.id.clone()).await?;

    let Some(data) = query.data.as_deref() else {
        return Ok(());
    };
    let Some(message) = query.message.as_ref() else {
        return Ok(());
    };

    let replies = console.handle_callback(message.chat.id.0, data).await;
    send_replies(&bot, message.chat.id, replies).await
}

async fn send_replies(
    bot: &Bot,
    chat_id: ChatId,
    replies: Vec<Outbound>,
) -> Result<(), teloxide::RequestError> {
    for reply in replies {
        let request = bot.send_message(chat_id, reply.text);

        match reply_markup(reply.keyboard) {
            Some(markup) => request.reply_markup(markup).await?,
            None => request.await?,
        };
    }

    Ok(())
}

/// Translates a console keyboard into Telegram reply markup.
pub(crate) fn reply_markup(keyboard: Keyboard) -> Option<ReplyMarkup> {
    match keyboard {
        Keyboard::Unchanged => None,
        Keyboard::MainMenu => Some(ReplyMarkup::Keyboard(main_menu_keyboard())),
        Keyboard::Remove => Some(ReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
        Keyboard::Inline(buttons) => {
            let rows = buttons
                .into_iter()
                .map(|(label, data)| vec![InlineKeyboardButton::callback(label, data)])
                .collect::<Vec<_>>();
            Some(ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(rows)))
        }
    }
}

fn main_menu_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(BAN_STORY_BUTTON)],
        vec![KeyboardButton::new(WARN_USER_BUTTON)],
        vec![KeyboardButton::new(REPORTS_BUTTON)],
        vec![KeyboardButton::new(MAIN_MENU_BUTTON)],
    ])
    .resize_keyboard(true)
}
