use crate::{data::story_part::StoryPartRepository, model::story_part::AddPartParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod delete_and_close_gap;
mod reorder;

async fn part_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Story)
        .with_table(entity::prelude::StoryPart)
        .build()
        .await
        .unwrap()
}
