use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250410_000001_create_user_table::User, m20250411_000004_create_story_table::Story,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoryPart::Table)
                    .if_not_exists()
                    .col(pk_auto(StoryPart::Id))
                    .col(integer(StoryPart::StoryId))
                    .col(integer(StoryPart::AuthorId))
                    .col(text(StoryPart::Content))
                    .col(integer(StoryPart::Position))
                    .col(
                        timestamp(StoryPart::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(StoryPart::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_part_story_id")
                            .from(StoryPart::Table, StoryPart::StoryId)
                            .to(Story::Table, Story::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_part_author_id")
                            .from(StoryPart::Table, StoryPart::AuthorId)
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
            .drop_table(Table::drop().table(StoryPart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoryPart {
    Table,
    Id,
    StoryId,
    AuthorId,
    Content,
    Position,
    CreatedAt,
    UpdatedAt,
}
