use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    bot::notify::notify_admins_of_report,
    dto::{api::MessageDto, report::ReportCreateDto},
    error::AppError,
    middleware::auth::AuthGuard,
    model::report::CreateReportParam,
    service::report::ReportService,
    state::AppState,
};

/// POST /api/stories/{id}/reports - Report a story
///
/// A user can report a given story at most once. After the report is stored,
/// the configured admin chats are notified over Telegram; that notification
/// is best-effort and never affects the response.
///
/// # Authentication
/// Requires a valid bearer token.
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `400 Bad Request`: The caller already reported this story
/// - `404 Not Found`: No story with that id
pub async fn report_story(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<ReportCreateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let summary = ReportService::new(&state.db)
        .create(CreateReportParam {
            story_id,
            user_id: user.id,
            reason: payload.reason,
            details: payload.details,
        })
        .await?;

    let bot = state.bot.clone();
    let admin_chat_ids = state.admin_chat_ids.clone();
    tokio::spawn(async move {
        notify_admins_of_report(&bot, &admin_chat_ids, &summary).await;
    });

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Story reported successfully".to_string(),
        }),
    ))
}
