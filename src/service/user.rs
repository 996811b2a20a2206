//! User service for business logic.
//!
//! This module provides the `UserService` for account registration, login,
//! profile management, and account deletion. It orchestrates the user
//! repository and the auth service while working with domain models rather
//! than DTOs.

use sea_orm::DatabaseConnection;

use crate::{
    data::{statistics::StatisticsRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{
        CreateUserParam, CurrentUser, LoginParam, Profile, RegisterParam, UpdateProfileParam,
        UpdateUserParam, User,
    },
    service::auth::AuthService,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Rejects duplicate emails and logins, hashes the password, and creates
    /// the user with an empty profile and zeroed statistics in one
    /// transaction.
    ///
    /// # Arguments
    /// - `param` - Login, email, and plain-text password
    /// - `auth` - Auth service used for password hashing
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Blank fields or email/login already taken
    /// - `Err(AppError::DbErr)` - Database error during creation
    pub async fn register(&self, param: RegisterParam, auth: &AuthService<'_>) -> Result<User, AppError> {
        let login = param.login.trim().to_string();
        let email = param.email.trim().to_string();

        if login.is_empty() {
            return Err(AppError::BadRequest("Login cannot be empty".to_string()));
        }
        if email.is_empty() {
            return Err(AppError::BadRequest("Email cannot be empty".to_string()));
        }
        if param.password.is_empty() {
            return Err(AppError::BadRequest("Password cannot be empty".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&email).await? {
            return Err(AppError::BadRequest(
                "User with this email already exists".to_string(),
            ));
        }
        if user_repo.find_by_login(&login).await?.is_some() {
            return Err(AppError::BadRequest(
                "User with this login already exists".to_string(),
            ));
        }

        let user = user_repo
            .create_with_profile(CreateUserParam {
                login,
                email,
                password_hash: auth.hash_password(&param.password)?,
            })
            .await?;

        Ok(User::from_entity(user))
    }

    /// Authenticates a login attempt and issues a bearer token.
    ///
    /// # Arguments
    /// - `param` - Login and plain-text password
    /// - `auth` - Auth service for password verification and token issuance
    ///
    /// # Returns
    /// - `Ok((token, CurrentUser))` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown login or wrong password
    pub async fn login(
        &self,
        param: LoginParam,
        auth: &AuthService<'_>,
    ) -> Result<(String, CurrentUser), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_login(&param.login).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !auth.verify_password(&param.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = auth.issue_token(&user)?;

        let (user, profile) = user_repo
            .find_with_profile(user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok((token, CurrentUser::from_entities(user, profile)))
    }

    /// Gets the authenticated user's own account view.
    pub async fn current_user(&self, user_id: i32) -> Result<CurrentUser, AppError> {
        let (user, profile) = UserRepository::new(self.db)
            .find_with_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(CurrentUser::from_entities(user, profile))
    }

    /// Gets all users.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).all().await?;
        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Gets a single user.
    pub async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(User::from_entity(user))
    }

    /// Gets a user's profile page: profile data plus statistics.
    ///
    /// # Arguments
    /// - `user_id` - Profile owner
    /// - `viewer_id` - The authenticated viewer, used for the `is_current_user` marker
    pub async fn profile(&self, user_id: i32, viewer_id: i32) -> Result<Profile, AppError> {
        let (user, profile) = UserRepository::new(self.db)
            .find_with_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let statistics = StatisticsRepository::new(self.db).find_by_user(user_id).await?;

        let (description, profile_image) = profile
            .map(|p| (p.description, p.profile_image))
            .unwrap_or_default();

        let (started, contributed, likes, comments) = statistics
            .map(|s| {
                (
                    s.stories_started,
                    s.stories_contributed,
                    s.likes_received,
                    s.comments_received,
                )
            })
            .unwrap_or_default();

        Ok(Profile {
            id: user.id,
            login: user.login,
            description,
            profile_image,
            stories_started: started,
            stories_contributed: contributed,
            likes_received: likes,
            comments_received: comments,
            is_current_user: user_id == viewer_id,
        })
    }

    /// Updates a user's profile row.
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(param.user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if !user_repo.update_profile(param).await? {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }

        Ok(())
    }

    /// Applies a partial account update.
    pub async fn update_user(&self, param: UpdateUserParam) -> Result<CurrentUser, AppError> {
        let (user, profile) = UserRepository::new(self.db)
            .update_account(param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(CurrentUser::from_entities(user, profile))
    }

    /// Deletes an account with its profile and statistics rows.
    pub async fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete_cascade(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
