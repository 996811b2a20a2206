//! User statistics counters.
//!
//! Counter bumps are single UPDATE statements so concurrent requests cannot
//! lose increments through read-modify-write races.

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use entity::user_statistics::Column;

pub struct StatisticsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the statistics row for a user.
    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::user_statistics::Model>, DbErr> {
        entity::prelude::UserStatistics::find()
            .filter(Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Bumps the number of stories the user has started.
    pub async fn increment_stories_started(&self, user_id: i32) -> Result<(), DbErr> {
        self.adjust(user_id, Column::StoriesStarted, 1).await
    }

    /// Bumps the number of stories the user has contributed parts to.
    pub async fn increment_stories_contributed(&self, user_id: i32) -> Result<(), DbErr> {
        self.adjust(user_id, Column::StoriesContributed, 1).await
    }

    /// Adjusts the number of likes the user's stories have received.
    ///
    /// `delta` is +1 on like and -1 on unlike.
    pub async fn adjust_likes_received(&self, user_id: i32, delta: i32) -> Result<(), DbErr> {
        self.adjust(user_id, Column::LikesReceived, delta).await
    }

    /// Bumps the number of comments the user's stories have received.
    pub async fn increment_comments_received(&self, user_id: i32) -> Result<(), DbErr> {
        self.adjust(user_id, Column::CommentsReceived, 1).await
    }

    async fn adjust(&self, user_id: i32, column: Column, delta: i32) -> Result<(), DbErr> {
        entity::prelude::UserStatistics::update_many()
            .filter(Column::UserId.eq(user_id))
            .col_expr(column, Expr::col(column).add(delta))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
