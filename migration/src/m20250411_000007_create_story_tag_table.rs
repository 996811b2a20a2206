use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250411_000004_create_story_table::Story, m20250411_000006_create_tag_table::Tag,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoryTag::Table)
                    .if_not_exists()
                    .col(integer(StoryTag::StoryId))
                    .col(integer(StoryTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(StoryTag::StoryId)
                            .col(StoryTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_tag_story_id")
                            .from(StoryTag::Table, StoryTag::StoryId)
                            .to(Story::Table, Story::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_tag_tag_id")
                            .from(StoryTag::Table, StoryTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoryTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoryTag {
    Table,
    StoryId,
    TagId,
}
