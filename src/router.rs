//! Axum route configuration and API documentation.

use std::path::Path;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        comment, confirmation, like, report, search, story, story_part, upload, user, user_story,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controller::story::get_stories,
        crate::controller::story::get_story,
        crate::controller::story::create_story,
        crate::controller::story::update_story,
        crate::controller::story::delete_story,
    ),
    components(schemas(
        crate::dto::api::ErrorDto,
        crate::dto::api::MessageDto,
        crate::dto::story::StoryCreateDto,
        crate::dto::story::StoryDetailDto,
        crate::dto::story::StorySummaryDto,
        crate::dto::story::StoryUpdateDto,
        crate::dto::story_part::StoryPartDto,
        crate::dto::user::UserDto,
    )),
    tags(
        (name = "story", description = "Collaborative story endpoints")
    )
)]
struct ApiDoc;

pub fn router(upload_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/api/users/register", post(user::register))
        .route("/api/users/login", post(user::login))
        .route("/api/users", get(user::get_users))
        .route("/api/users/me", get(user::get_current_user))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/users/{id}/profile",
            get(user::get_profile).put(user::update_profile),
        )
        .route("/api/users/{id}/stories", get(user_story::get_user_stories))
        .route(
            "/api/users/{id}/contributions",
            get(user_story::get_user_contributions),
        )
        .route(
            "/api/stories",
            get(story::get_stories).post(story::create_story),
        )
        .route(
            "/api/stories/{id}",
            get(story::get_story)
                .put(story::update_story)
                .delete(story::delete_story),
        )
        .route("/api/stories/{id}/parts", post(story_part::add_part))
        .route(
            "/api/stories/{id}/parts/order",
            put(story_part::reorder_parts),
        )
        .route(
            "/api/stories/{id}/parts/{part_id}",
            get(story_part::get_part)
                .put(story_part::update_part)
                .delete(story_part::delete_part),
        )
        .route(
            "/api/stories/{id}/comments",
            get(comment::get_comments).post(comment::add_comment),
        )
        .route(
            "/api/stories/{id}/comments/{comment_id}",
            get(comment::get_comment).delete(comment::delete_comment),
        )
        .route("/api/stories/{id}/likes", post(like::toggle_like))
        .route("/api/stories/{id}/likes/status", get(like::get_like_status))
        .route("/api/stories/{id}/reports", post(report::report_story))
        .route("/api/search", get(search::search_stories))
        .route("/api/confirmation/send-code", post(confirmation::send_code))
        .route(
            "/api/confirmation/verify-code",
            post(confirmation::verify_code),
        )
        .route("/api/uploads", post(upload::upload_image))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
