use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    dto::upload::UploadResponseDto, error::AppError, middleware::auth::AuthGuard,
    state::AppState,
};

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// POST /api/uploads - Upload an image
///
/// Accepts a multipart form with a `file` field, stores it under a generated
/// UUID filename, and returns the public URL. Uploaded files are served
/// statically under `/uploads`.
///
/// # Authentication
/// Requires a valid bearer token.
///
/// # Returns
/// - `201 Created`: URL of the stored file
/// - `400 Bad Request`: Missing file field, empty file, or unsupported type
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &headers).require().await?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let extension = field
            .file_name()
            .and_then(|name| name.rsplit('.').next())
            .map(str::to_lowercase)
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| AppError::BadRequest("Unsupported file type".to_string()))?;

        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        tokio::fs::write(state.upload_dir.join(&filename), &data).await?;

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponseDto {
                url: format!("{}/uploads/{}", state.app_url, filename),
            }),
        ));
    }

    Err(AppError::BadRequest("No file field in upload".to_string()))
}
