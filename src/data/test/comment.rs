use crate::{data::comment::CommentRepository, model::comment::AddCommentParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

async fn comment_tables() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Story)
        .with_table(entity::prelude::Comment)
        .build()
        .await
        .unwrap()
}

/// Tests inserting a comment and listing it with its author.
#[tokio::test]
async fn inserts_and_lists_with_author() -> Result<(), DbErr> {
    let test = comment_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;

    let repo = CommentRepository::new(db);
    repo.insert(AddCommentParam {
        story_id: story.id,
        user_id: reader.id,
        content: "Lovely".to_string(),
    })
    .await?;

    let comments = repo.list_for_story(story.id).await?;

    assert_eq!(comments.len(), 1);
    let (comment, author) = &comments[0];
    assert_eq!(comment.content, "Lovely");
    assert_eq!(author.id, reader.id);

    Ok(())
}

/// Tests scoping: a comment is only found under its own story.
#[tokio::test]
async fn find_is_scoped_to_story() -> Result<(), DbErr> {
    let test = comment_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;
    let other = factory::create_story(db, owner.id).await?;

    let comment = factory::create_comment(db, story.id, owner.id).await?;

    let repo = CommentRepository::new(db);
    assert!(repo.find_with_author(story.id, comment.id).await?.is_some());
    assert!(repo.find_with_author(other.id, comment.id).await?.is_none());

    Ok(())
}
