use super::*;

/// Tests that the cascade delete removes every dependent row.
///
/// Builds a story with parts, tags, likes, comments, and reports, then
/// deletes it and verifies every dependent table is empty for that story
/// while an unrelated story keeps all of its rows.
///
/// Expected: all dependents of the deleted story gone, the other story intact
#[tokio::test]
async fn removes_story_and_all_dependents() -> Result<(), DbErr> {
    let test = story_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;

    let story = factory::create_story(db, owner.id).await?;
    factory::create_part(db, story.id, owner.id, 1).await?;
    factory::create_part(db, story.id, reader.id, 2).await?;
    let tag = factory::create_tag(db).await?;
    factory::link_tag(db, story.id, tag.id).await?;
    factory::create_like(db, story.id, reader.id).await?;
    factory::create_comment(db, story.id, reader.id).await?;
    factory::create_report(db, story.id, reader.id).await?;

    let other = factory::create_story(db, owner.id).await?;
    factory::create_part(db, other.id, owner.id, 1).await?;
    factory::create_like(db, other.id, reader.id).await?;

    StoryRepository::new(db).delete_cascade(story.id).await?;

    assert!(entity::prelude::Story::find_by_id(story.id).one(db).await?.is_none());
    assert_eq!(entity::prelude::StoryTag::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Report::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    // Only the other story's rows remain.
    let parts = entity::prelude::StoryPart::find().all(db).await?;
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].story_id, other.id);

    let likes = entity::prelude::Like::find().all(db).await?;
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].story_id, other.id);

    // The tag row itself survives; only the link is removed.
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 1);

    Ok(())
}
