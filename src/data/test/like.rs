use crate::data::like::LikeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

async fn like_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Story)
        .with_table(entity::prelude::Like)
        .build()
        .await
        .unwrap()
}

/// Tests the insert, lookup, and delete cycle for a like.
#[tokio::test]
async fn insert_find_delete_cycle() -> Result<(), DbErr> {
    let test = like_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;

    let repo = LikeRepository::new(db);

    assert!(repo.find_by_story_and_user(story.id, reader.id).await?.is_none());

    repo.insert(story.id, reader.id).await?;
    let like = repo.find_by_story_and_user(story.id, reader.id).await?;
    assert!(like.is_some());

    repo.delete(like.unwrap()).await?;
    assert!(repo.find_by_story_and_user(story.id, reader.id).await?.is_none());

    Ok(())
}
