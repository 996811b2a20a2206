use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
    state::AppState,
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self {
            db: &state.db,
            jwt_secret: &state.jwt_secret,
            headers,
        }
    }

    /// Resolves the bearer token to a user row, failing on any missing or
    /// invalid credential.
    pub async fn require(&self) -> Result<entity::user::Model, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = AuthService::new(self.jwt_secret).verify_token(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        Ok(user)
    }

    /// Resolves the bearer token if one is present and valid; anonymous and
    /// invalid credentials both read as `None`. Used by endpoints that are
    /// public but show more to an authenticated viewer.
    pub async fn optional(&self) -> Result<Option<entity::user::Model>, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Ok(None);
        };

        let Ok(claims) = AuthService::new(self.jwt_secret).verify_token(token) else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db).find_by_id(claims.sub).await?)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
