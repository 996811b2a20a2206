//! New-report notifications to the admin chats.
//!
//! When a report is filed over HTTP, every configured admin chat gets the
//! same summary the console's report listing shows, with the same inline
//! actions. Best-effort: failures are logged and never surface to the
//! reporting user.

use teloxide::{prelude::*, types::ChatId};

use crate::bot::{console::render_report, start::reply_markup};
use crate::model::report::ReportSummary;

/// Pushes a new-report summary to all configured admin chats.
pub async fn notify_admins_of_report(bot: &Bot, admin_chat_ids: &[i64], report: &ReportSummary) {
    let outbound = render_report(report);

    for &chat_id in admin_chat_ids {
        let request = bot.send_message(ChatId(chat_id), outbound.text.clone());

        let result = match reply_markup(outbound.keyboard.clone()) {
            Some(markup) => request.reply_markup(markup).await,
            None => request.await,
        };

        if let Err(e) = result {
            tracing::warn!(
                "Failed to notify admin chat {} about report {}: {}",
                chat_id,
                report.report_id,
                e
            );
        }
    }
}
