use super::*;

/// Tests creating a story with tags and an initial part.
///
/// Expected: tags linked, first part at position 1 authored by the owner
#[tokio::test]
async fn creates_story_with_tags_and_initial_part() -> Result<(), DbErr> {
    let test = story_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    let story = repo
        .create(CreateStoryParam {
            tags: vec!["fantasy".to_string(), "short".to_string()],
            initial_content: Some("Once upon a time".to_string()),
            ..create_param(owner.id, "The Beginning")
        })
        .await?;

    let overview = repo.overview(story.id).await?.unwrap();
    let mut tags = overview.tags.clone();
    tags.sort();
    assert_eq!(tags, vec!["fantasy", "short"]);
    assert_eq!(overview.parts_count, 1);

    let parts = entity::prelude::StoryPart::find().all(db).await?;
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].position, 1);
    assert_eq!(parts[0].author_id, owner.id);
    assert_eq!(parts[0].content, "Once upon a time");

    Ok(())
}

/// Tests that existing tag rows are reused instead of duplicated.
///
/// Expected: one tag row shared by two stories
#[tokio::test]
async fn reuses_existing_tag_rows() -> Result<(), DbErr> {
    let test = story_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    repo.create(CreateStoryParam {
        tags: vec!["fantasy".to_string()],
        ..create_param(owner.id, "First")
    })
    .await?;
    repo.create(CreateStoryParam {
        tags: vec!["fantasy".to_string()],
        ..create_param(owner.id, "Second")
    })
    .await?;

    assert_eq!(entity::prelude::Tag::find().count(db).await?, 1);
    assert_eq!(entity::prelude::StoryTag::find().count(db).await?, 2);

    Ok(())
}

/// Tests creating a story without initial content.
///
/// Expected: no parts created
#[tokio::test]
async fn creates_story_without_parts() -> Result<(), DbErr> {
    let test = story_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    let story = repo.create(create_param(owner.id, "Empty")).await?;

    let overview = repo.overview(story.id).await?.unwrap();
    assert_eq!(overview.parts_count, 0);

    Ok(())
}
