use crate::{
    data::story::StoryRepository,
    model::story::{CreateStoryParam, SearchParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_cascade;
mod search;
mod update_fields;

async fn story_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Story)
        .with_table(entity::prelude::StoryPart)
        .with_table(entity::prelude::Tag)
        .with_table(entity::prelude::StoryTag)
        .with_table(entity::prelude::Like)
        .with_table(entity::prelude::Comment)
        .with_table(entity::prelude::Report)
        .build()
        .await
        .unwrap()
}

fn create_param(owner_id: i32, title: &str) -> CreateStoryParam {
    CreateStoryParam {
        owner_id,
        title: title.to_string(),
        description: None,
        cover_image_url: None,
        is_public: true,
        tags: Vec::new(),
        initial_content: None,
    }
}
