use super::*;

/// Tests partial field updates.
///
/// Expected: provided fields change, absent fields keep their values
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = story_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;
    let original_title = story.title.clone();

    let repo = StoryRepository::new(db);
    let updated = repo
        .update_fields(
            story,
            None,
            Some("New description".to_string()),
            None,
            Some(false),
            None,
            None,
        )
        .await?;

    assert_eq!(updated.title, original_title);
    assert_eq!(updated.description.as_deref(), Some("New description"));
    assert!(!updated.is_public);
    assert!(updated.is_editable);

    Ok(())
}

/// Tests tag-set reconciliation on update.
///
/// A story tagged [old, kept] updated to [kept, new] must end up linked to
/// exactly those two tags, while the unlinked tag row itself survives.
///
/// Expected: links replaced, no orphan links, tag rows never deleted
#[tokio::test]
async fn replaces_tag_set() -> Result<(), DbErr> {
    let test = story_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    let story = repo
        .create(CreateStoryParam {
            tags: vec!["old".to_string(), "kept".to_string()],
            ..create_param(owner.id, "Tagged")
        })
        .await?;

    repo.update_fields(
        story.clone(),
        None,
        None,
        None,
        None,
        None,
        Some(vec!["kept".to_string(), "new".to_string()]),
    )
    .await?;

    let mut tags = repo.overview(story.id).await?.unwrap().tags;
    tags.sort();
    assert_eq!(tags, vec!["kept", "new"]);

    // Three tag rows exist in total; "old" is merely unlinked.
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 3);

    Ok(())
}
