//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts together with
//! their one-to-one profile and statistics rows. Account creation and deletion touch
//! all three tables and run inside a single transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::user::{CreateUserParam, UpdateProfileParam, UpdateUserParam};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user together with an empty profile and a zeroed statistics row.
    ///
    /// All three inserts run in one transaction so a half-created account can
    /// never be observed.
    ///
    /// # Arguments
    /// - `param` - Login, email, and pre-hashed password
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user row
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn create_with_profile(
        &self,
        param: CreateUserParam,
    ) -> Result<entity::user::Model, DbErr> {
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            login: ActiveValue::Set(param.login),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            description: ActiveValue::Set(String::new()),
            profile_image: ActiveValue::Set(String::new()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::user_statistics::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            stories_started: ActiveValue::Set(0),
            stories_contributed: ActiveValue::Set(0),
            likes_received: ActiveValue::Set(0),
            comments_received: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(user)
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by their login name.
    pub async fn find_by_login(&self, login: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Login.eq(login))
            .one(self.db)
            .await
    }

    /// Checks whether an account with the given email already exists.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all users ordered alphabetically by login.
    pub async fn all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Login)
            .all(self.db)
            .await
    }

    /// Finds a user together with their profile row.
    ///
    /// # Returns
    /// - `Ok(Some((user, profile)))` - User found; profile is `None` only for
    ///   rows predating profile creation
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_profile(
        &self,
        user_id: i32,
    ) -> Result<Option<(entity::user::Model, Option<entity::user_profile::Model>)>, DbErr> {
        let result = entity::prelude::User::find_by_id(user_id)
            .find_also_related(entity::prelude::UserProfile)
            .one(self.db)
            .await?;

        Ok(result)
    }

    /// Updates the mutable account fields of a user and their profile.
    ///
    /// Only fields present in the parameter are written; the rest keep their
    /// current values. User and profile updates share one transaction.
    ///
    /// # Arguments
    /// - `param` - Optional new login, email, description, and profile image
    ///
    /// # Returns
    /// - `Ok(Some((user, profile)))` - Updated rows
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn update_account(
        &self,
        param: UpdateUserParam,
    ) -> Result<Option<(entity::user::Model, Option<entity::user_profile::Model>)>, DbErr> {
        let Some((user, profile)) = self.find_with_profile(param.user_id).await? else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        let mut active = user.into_active_model();
        if let Some(login) = param.login {
            active.login = ActiveValue::Set(login);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        let user = active.update(&txn).await?;

        let profile = match profile {
            Some(profile) => {
                let mut active = profile.into_active_model();
                if let Some(description) = param.description {
                    active.description = ActiveValue::Set(description);
                }
                if let Some(profile_image) = param.profile_image {
                    active.profile_image = ActiveValue::Set(profile_image);
                }
                Some(active.update(&txn).await?)
            }
            None => None,
        };

        txn.commit().await?;

        Ok(Some((user, profile)))
    }

    /// Updates a user's profile row.
    ///
    /// # Returns
    /// - `Ok(true)` - Profile found and updated
    /// - `Ok(false)` - No profile row for that user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<bool, DbErr> {
        let profile = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::UserId.eq(param.user_id))
            .one(self.db)
            .await?;

        let Some(profile) = profile else {
            return Ok(false);
        };

        let mut active = profile.into_active_model();
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(profile_image) = param.profile_image {
            active.profile_image = ActiveValue::Set(profile_image);
        }
        active.update(self.db).await?;

        Ok(true)
    }

    /// Deletes a user together with their profile and statistics rows.
    ///
    /// Runs in one transaction. Stories owned by the user (and their dependent
    /// rows) are removed by the schema's cascading foreign keys.
    ///
    /// # Returns
    /// - `Ok(true)` - User existed and was deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete_cascade(&self, user_id: i32) -> Result<bool, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;

        entity::prelude::UserProfile::delete_many()
            .filter(entity::user_profile::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        entity::prelude::UserStatistics::delete_many()
            .filter(entity::user_statistics::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        entity::prelude::User::delete_by_id(user.id).exec(&txn).await?;

        txn.commit().await?;

        Ok(true)
    }
}
