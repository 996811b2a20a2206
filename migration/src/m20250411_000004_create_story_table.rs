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
                    .table(Story::Table)
                    .if_not_exists()
                    .col(pk_auto(Story::Id))
                    .col(integer(Story::OwnerId))
                    .col(string(Story::Title))
                    .col(text_null(Story::Description))
                    .col(string_null(Story::CoverImageUrl))
                    .col(boolean(Story::IsPublic).default(true))
                    .col(boolean(Story::IsEditable).default(true))
                    .col(
                        timestamp(Story::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Story::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_owner_id")
                            .from(Story::Table, Story::OwnerId)
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
            .drop_table(Table::drop().table(Story::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Story {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    CoverImageUrl,
    IsPublic,
    IsEditable,
    CreatedAt,
    UpdatedAt,
}
