use sea_orm_migration::{prelude::*, schema::*};

use super::m20250410_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserStatistics::Table)
                    .if_not_exists()
                    .col(pk_auto(UserStatistics::Id))
                    .col(integer_uniq(UserStatistics::UserId))
                    .col(integer(UserStatistics::StoriesStarted).default(0))
                    .col(integer(UserStatistics::StoriesContributed).default(0))
                    .col(integer(UserStatistics::LikesReceived).default(0))
                    .col(integer(UserStatistics::CommentsReceived).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_statistics_user_id")
                            .from(UserStatistics::Table, UserStatistics::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserStatistics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserStatistics {
    Table,
    Id,
    UserId,
    StoriesStarted,
    StoriesContributed,
    LikesReceived,
    CommentsReceived,
}
