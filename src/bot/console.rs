//! The moderation console state machine.
//!
//! `Console` owns the per-chat session store and drives the authentication
//! gate and pending-action dialogue described in the module docs. It knows
//! nothing about Telegram: inputs are `(chat id, text)` pairs, outputs are
//! `Outbound` replies. Every handled input produces at least one reply, so an
//! operator is never left without a response.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    bot::{
        menu::{
            Outbound, BAN_STORY_BUTTON, BAN_STORY_CALLBACK, BAN_USER_CALLBACK, MAIN_MENU_BUTTON,
            REPORTS_BUTTON, REQUEST_EDIT_CALLBACK, WARN_USER_BUTTON,
        },
        session::{ActionKind, ChatState, SessionStore},
    },
    model::{
        moderation::{BanStoryParam, WarnUserParam},
        report::ReportSummary,
    },
    service::{
        email::Mailer,
        moderation::{ModerationService, REASON_MAX_CHARS},
    },
};

const MENU_TEXT: &str = "Admin Dashboard - Main Menu";
const PASSWORD_PROMPT: &str = "Please enter the admin password:";
const GENERIC_FAILURE: &str = "❌ Something went wrong. The action was not applied.";

/// The moderation console.
///
/// One instance lives for the whole process and is shared by every update
/// handler. All mutable state sits inside the `SessionStore`.
pub struct Console {
    db: DatabaseConnection,
    mailer: Arc<dyn Mailer>,
    admin_password: String,
    admin_chat_ids: Vec<i64>,
    sessions: SessionStore,
}

impl Console {
    /// Creates a console with its own empty session store.
    ///
    /// # Arguments
    /// - `db` - Database connection for moderation actions
    /// - `mailer` - Outbound email gateway for owner/user notifications
    /// - `admin_password` - Secret operators must submit to authenticate
    /// - `admin_chat_ids` - Allow-list of chat ids permitted to authenticate
    pub fn new(
        db: DatabaseConnection,
        mailer: Arc<dyn Mailer>,
        admin_password: String,
        admin_chat_ids: Vec<i64>,
    ) -> Self {
        Self {
            db,
            mailer,
            admin_password,
            admin_chat_ids,
            sessions: SessionStore::new(),
        }
    }

    /// Handles one text message from a chat.
    ///
    /// Holds the chat's session lock for the entire call, so messages from
    /// the same chat are processed strictly in arrival order.
    pub async fn handle_message(&self, chat_id: i64, text: &str) -> Vec<Outbound> {
        let session = self.sessions.entry(chat_id).await;
        let mut state = session.lock().await;

        match state.clone() {
            ChatState::Unauthenticated => {
                if text == self.admin_password && self.admin_chat_ids.contains(&chat_id) {
                    *state = ChatState::Idle;
                    tracing::info!("Operator chat {} authenticated", chat_id);
                    vec![Outbound::menu(MENU_TEXT)]
                } else {
                    vec![Outbound::text(PASSWORD_PROMPT)]
                }
            }

            // The explicit abort path: from any authenticated state back to Idle.
            _ if text == MAIN_MENU_BUTTON => {
                *state = ChatState::Idle;
                vec![Outbound::menu(MENU_TEXT)]
            }

            ChatState::Idle => match text {
                BAN_STORY_BUTTON => {
                    *state = ChatState::AwaitingTargetId(ActionKind::BanStory);
                    vec![Outbound::prompt("Please enter the story ID to ban:")]
                }
                WARN_USER_BUTTON => {
                    *state = ChatState::AwaitingTargetId(ActionKind::WarnUser);
                    vec![Outbound::prompt("Please enter the user ID to warn:")]
                }
                REPORTS_BUTTON => self.render_report_listing().await,
                _ => vec![Outbound::menu(MENU_TEXT)],
            },

            ChatState::AwaitingTargetId(kind) => match text.trim().parse::<i32>() {
                Ok(target_id) => {
                    *state = ChatState::AwaitingReason { kind, target_id };
                    vec![Outbound::prompt(reason_prompt(kind, target_id))]
                }
                Err(_) => vec![Outbound::text(
                    "That doesn't look like a number. Please enter a numeric ID:",
                )],
            },

            ChatState::AwaitingReason { kind, target_id } => {
                let reason = text.trim();
                if reason.is_empty() {
                    return vec![Outbound::text(reason_prompt(kind, target_id))];
                }
                if reason.chars().count() > REASON_MAX_CHARS {
                    return vec![Outbound::text(format!(
                        "That message is too long (limit {} characters). Please try again:",
                        REASON_MAX_CHARS
                    ))];
                }

                // The action completes (or fails) before the reply goes out;
                // either way the pending action is cleared.
                let replies = self.run_action(kind, target_id, reason).await;
                *state = ChatState::Idle;
                replies
            }
        }
    }

    /// Handles an inline-button press from the report listing.
    ///
    /// Callback data has the form `"<tag>:<target id>"`. Ban-story and
    /// ban-user jump straight to the reason prompt; request-edit executes
    /// immediately since it carries no free text.
    pub async fn handle_callback(&self, chat_id: i64, data: &str) -> Vec<Outbound> {
        let session = self.sessions.entry(chat_id).await;
        let mut state = session.lock().await;

        if *state == ChatState::Unauthenticated {
            return vec![Outbound::text(PASSWORD_PROMPT)];
        }

        let Some((tag, target_id)) = parse_callback(data) else {
            tracing::warn!("Malformed callback data from chat {}: {:?}", chat_id, data);
            return vec![Outbound::menu(MENU_TEXT)];
        };

        match tag {
            BAN_STORY_CALLBACK => {
                *state = ChatState::AwaitingReason {
                    kind: ActionKind::BanStory,
                    target_id,
                };
                vec![Outbound::prompt(reason_prompt(ActionKind::BanStory, target_id))]
            }
            BAN_USER_CALLBACK => {
                *state = ChatState::AwaitingReason {
                    kind: ActionKind::WarnUser,
                    target_id,
                };
                vec![Outbound::prompt(reason_prompt(ActionKind::WarnUser, target_id))]
            }
            REQUEST_EDIT_CALLBACK => {
                let replies = self.run_edit_request(target_id).await;
                *state = ChatState::Idle;
                replies
            }
            _ => {
                tracing::warn!("Unknown callback tag from chat {}: {:?}", chat_id, tag);
                vec![Outbound::menu(MENU_TEXT)]
            }
        }
    }

    /// Executes a collected action and renders its confirmation.
    async fn run_action(&self, kind: ActionKind, target_id: i32, reason: &str) -> Vec<Outbound> {
        let service = ModerationService::new(&self.db, self.mailer.as_ref());

        match kind {
            ActionKind::BanStory => {
                match service
                    .ban_story(BanStoryParam {
                        story_id: target_id,
                        reason: reason.to_string(),
                    })
                    .await
                {
                    Ok(Some(outcome)) => vec![Outbound::menu(format!(
                        "✅ Story deleted: {}\nID: {}\nReason: {}",
                        outcome.title, outcome.story_id, outcome.reason
                    ))],
                    Ok(None) => {
                        vec![Outbound::menu(format!("❌ Story {} not found", target_id))]
                    }
                    Err(e) => {
                        tracing::error!("Failed to ban story {}: {}", target_id, e);
                        vec![Outbound::menu(GENERIC_FAILURE)]
                    }
                }
            }
            ActionKind::WarnUser => {
                match service
                    .warn_user(WarnUserParam {
                        user_id: target_id,
                        message: reason.to_string(),
                    })
                    .await
                {
                    Ok(Some(outcome)) => {
                        let mut text = format!(
                            "⚠️ User warned: {}\nID: {}\nWarning: {}",
                            outcome.login, outcome.user_id, outcome.message
                        );
                        if !outcome.email_sent {
                            text.push_str("\nNote: the user could not be notified by email.");
                        }
                        vec![Outbound::menu(text)]
                    }
                    Ok(None) => {
                        vec![Outbound::menu(format!("❌ User {} not found", target_id))]
                    }
                    Err(e) => {
                        tracing::error!("Failed to warn user {}: {}", target_id, e);
                        vec![Outbound::menu(GENERIC_FAILURE)]
                    }
                }
            }
        }
    }

    async fn run_edit_request(&self, story_id: i32) -> Vec<Outbound> {
        let service = ModerationService::new(&self.db, self.mailer.as_ref());

        match service.request_edit(story_id).await {
            Ok(Some(outcome)) => {
                let mut text = format!(
                    "✏️ Edit requested for story: {}\nID: {}\nOwner: {}",
                    outcome.title, outcome.story_id, outcome.owner_login
                );
                if !outcome.email_sent {
                    text.push_str("\nNote: the owner could not be notified by email.");
                }
                vec![Outbound::menu(text)]
            }
            Ok(None) => vec![Outbound::menu(format!("❌ Story {} not found", story_id))],
            Err(e) => {
                tracing::error!("Failed to request edit of story {}: {}", story_id, e);
                vec![Outbound::menu(GENERIC_FAILURE)]
            }
        }
    }

    /// Renders the recent-report listing: one message per report, each with
    /// its inline action buttons. Read-only; the chat stays `Idle`.
    async fn render_report_listing(&self) -> Vec<Outbound> {
        let service = ModerationService::new(&self.db, self.mailer.as_ref());

        let reports = match service.list_reports().await {
            Ok(reports) => reports,
            Err(e) => {
                tracing::error!("Failed to list reports: {}", e);
                return vec![Outbound::menu(GENERIC_FAILURE)];
            }
        };

        if reports.is_empty() {
            return vec![Outbound::menu("No reports.")];
        }

        reports.iter().map(render_report).collect()
    }
}

/// Renders one report as a moderator-facing summary with inline actions.
///
/// Shared with the new-report notification path so operators see the same
/// format in both places.
pub(crate) fn render_report(report: &ReportSummary) -> Outbound {
    let text = format!(
        "🚨 Report #{}\n\n\
         Story: {} (ID: {})\n\
         Author: {} (ID: {})\n\
         Reporter: {} (ID: {})\n\
         Reason: {}\n\
         Details: {}\n\
         Reported: {}",
        report.report_id,
        report.story_title,
        report.story_id,
        report.author_login,
        report.author_id,
        report.reporter_login,
        report.reporter_id,
        report.reason.as_deref().unwrap_or("-"),
        report.details.as_deref().unwrap_or("-"),
        report.created_at.format("%Y-%m-%d %H:%M UTC"),
    );

    Outbound::inline(
        text,
        vec![
            (
                "🚫 Ban Story".to_string(),
                format!("{}:{}", BAN_STORY_CALLBACK, report.story_id),
            ),
            (
                "⚠️ Warn Author".to_string(),
                format!("{}:{}", BAN_USER_CALLBACK, report.author_id),
            ),
            (
                "✏️ Request Edit".to_string(),
                format!("{}:{}", REQUEST_EDIT_CALLBACK, report.story_id),
            ),
        ],
    )
}

fn reason_prompt(kind: ActionKind, target_id: i32) -> String {
    match kind {
        ActionKind::BanStory => format!(
            "Please enter the reason for banning story (ID: {}):",
            target_id
        ),
        ActionKind::WarnUser => format!(
            "Please enter warning message for user (ID: {}):",
            target_id
        ),
    }
}

fn parse_callback(data: &str) -> Option<(&str, i32)> {
    let (tag, id) = data.split_once(':')?;
    Some((tag, id.parse().ok()?))
}
