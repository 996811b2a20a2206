//! Password hashing and bearer-token issuance.
//!
//! Passwords are hashed with Argon2id and a per-password random salt. API
//! authentication uses stateless HS256 JWTs carrying the user id and login,
//! valid for seven days.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{auth::AuthError, AppError};

const TOKEN_VALIDITY_DAYS: i64 = 7;

/// JWT claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token authenticates.
    pub sub: i32,
    /// Login name at issue time.
    pub login: String,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

/// Service providing password hashing and token operations.
pub struct AuthService<'a> {
    jwt_secret: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(jwt_secret: &'a str) -> Self {
        Self { jwt_secret }
    }

    /// Hashes a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    }

    /// Verifies a password against a stored hash.
    ///
    /// An unparseable hash counts as a failed verification rather than an
    /// error so login attempts against corrupt rows simply fail.
    pub fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        PasswordHash::new(password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// Issues a signed bearer token for a user.
    pub fn issue_token(&self, user: &entity::user::Model) -> Result<String, AppError> {
        let claims = Claims {
            sub: user.id,
            login: user.login.clone(),
            exp: (Utc::now() + Duration::days(TOKEN_VALIDITY_DAYS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("Failed to issue token: {}", e)))
    }

    /// Validates a bearer token and returns its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> entity::user::Model {
        entity::user::Model {
            id: 7,
            login: "ishmael".to_string(),
            email: "ishmael@example.com".to_string(),
            password_hash: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn hashed_password_verifies() {
        let auth = AuthService::new("secret");
        let hash = auth.hash_password("call me").unwrap();

        assert!(auth.verify_password("call me", &hash));
        assert!(!auth.verify_password("call you", &hash));
    }

    #[test]
    fn issued_token_round_trips() {
        let auth = AuthService::new("secret");
        let token = auth.issue_token(&sample_user()).unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.login, "ishmael");
    }

    #[test]
    fn token_fails_with_wrong_secret() {
        let token = AuthService::new("secret").issue_token(&sample_user()).unwrap();

        assert!(AuthService::new("other").verify_token(&token).is_err());
    }
}
