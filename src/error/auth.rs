use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// The token was valid but the user it names no longer exists.
    #[error("Authenticated user {0} not found in database")]
    UserNotInDatabase(i32),

    /// Login or password did not match a stored credential pair.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized with a client-safe message; the
/// precise failure reason is only visible in server logs.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::MissingToken => "Authentication required",
            Self::InvalidToken => "Invalid or expired token",
            Self::UserNotInDatabase(_) => "Invalid or expired token",
            Self::InvalidCredentials => "Invalid credentials",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
