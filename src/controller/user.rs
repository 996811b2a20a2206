use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::MessageDto,
        user::{LoginDto, LoginResponseDto, ProfileUpdateDto, RegisterDto, UserDto, UserUpdateDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::user::{LoginParam, RegisterParam, UpdateProfileParam, UpdateUserParam, User},
    service::{auth::AuthService, user::UserService},
    state::AppState,
};

/// POST /api/users/register - Create a new account
///
/// Registers a user with a unique login and email. The account gets an empty
/// profile and zeroed statistics.
///
/// # Returns
/// - `201 Created`: The created user
/// - `400 Bad Request`: Blank fields or login/email already taken
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthService::new(&state.jwt_secret);

    let user = UserService::new(&state.db)
        .register(
            RegisterParam {
                login: payload.login,
                email: payload.email,
                password: payload.password,
            },
            &auth,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/users/login - Authenticate and issue a bearer token
///
/// # Returns
/// - `200 OK`: Token and the authenticated user's own view
/// - `401 Unauthorized`: Unknown login or wrong password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthService::new(&state.jwt_secret);

    let (token, user) = UserService::new(&state.db)
        .login(
            LoginParam {
                login: payload.login,
                password: payload.password,
            },
            &auth,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// GET /api/users/me - Get the authenticated user's own account
///
/// # Authentication
/// Requires a valid bearer token.
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &headers).require().await?;

    let current = UserService::new(&state.db).current_user(user.id).await?;

    Ok((StatusCode::OK, Json(current.into_dto())))
}

/// GET /api/users - List all users
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).list().await?;
    let users: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// GET /api/users/{id} - Get a single user
///
/// # Returns
/// - `200 OK`: The user
/// - `404 Not Found`: No user with that id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/users/{id}/profile - Get a user's profile page
///
/// # Authentication
/// Requires a valid bearer token; `is_current_user` reflects the caller.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state, &headers).require().await?;

    let profile = UserService::new(&state.db).profile(user_id, viewer.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// PUT /api/users/{id}/profile - Update a user's profile
///
/// # Authentication
/// Requires a valid bearer token; users can only edit their own profile.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<ProfileUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let acting = AuthGuard::new(&state, &headers).require().await?;

    if acting.id != user_id {
        return Err(AppError::Forbidden(
            "You can only edit your own profile".to_string(),
        ));
    }

    UserService::new(&state.db)
        .update_profile(UpdateProfileParam {
            user_id,
            description: payload.description,
            profile_image: payload.profile_image,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Profile updated".to_string(),
        }),
    ))
}

/// PUT /api/users/{id} - Update account fields
///
/// # Authentication
/// Requires a valid bearer token; users can only edit their own account.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<UserUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let acting = AuthGuard::new(&state, &headers).require().await?;

    if acting.id != user_id {
        return Err(AppError::Forbidden(
            "You can only edit your own account".to_string(),
        ));
    }

    let current = UserService::new(&state.db)
        .update_user(UpdateUserParam {
            user_id,
            login: payload.login,
            email: payload.email,
            description: payload.description,
            profile_image: payload.profile_image,
        })
        .await?;

    Ok((StatusCode::OK, Json(current.into_dto())))
}

/// DELETE /api/users/{id} - Delete an account
///
/// Removes the user with their profile and statistics; owned stories and
/// their dependent rows go with them.
///
/// # Authentication
/// Requires a valid bearer token; users can only delete their own account.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let acting = AuthGuard::new(&state, &headers).require().await?;

    if acting.id != user_id {
        return Err(AppError::Forbidden(
            "You can only delete your own account".to_string(),
        ));
    }

    UserService::new(&state.db).delete_user(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
