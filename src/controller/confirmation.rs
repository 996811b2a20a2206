use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{
        api::MessageDto,
        confirmation::{SendCodeDto, VerifyCodeDto},
    },
    error::AppError,
    state::AppState,
};

/// POST /api/confirmation/send-code - Email a confirmation code
///
/// Generates a six-digit code with a five-minute TTL and emails it to the
/// address. Unlike the moderation notifications, the email here IS the
/// operation: a send failure fails the request.
pub async fn send_code(
    State(state): State<AppState>,
    Json(payload): Json<SendCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    state
        .confirmation_codes
        .send_code(email, state.mailer.as_ref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Confirmation code sent successfully".to_string(),
        }),
    ))
}

/// POST /api/confirmation/verify-code - Verify a confirmation code
///
/// A matching code is consumed and cannot be replayed.
pub async fn verify_code(
    State(state): State<AppState>,
    Json(payload): Json<VerifyCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let verified = state
        .confirmation_codes
        .verify_and_consume(payload.email.trim(), payload.code.trim())
        .await;

    if !verified {
        return Err(AppError::BadRequest(
            "Code expired or not found".to_string(),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Code verified successfully".to_string(),
        }),
    ))
}
