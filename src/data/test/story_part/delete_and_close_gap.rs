use super::*;

/// Tests that deleting a middle part leaves a dense 1..N-1 sequence.
///
/// Three parts at 1, 2, 3; deleting the middle one must shift the last part
/// down so the remaining sequence is 1, 2 with no gap.
#[tokio::test]
async fn closes_gap_after_middle_deletion() -> Result<(), DbErr> {
    let test = part_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;

    factory::create_part_with_content(db, story.id, owner.id, 1, "first").await?;
    let middle = factory::create_part_with_content(db, story.id, owner.id, 2, "second").await?;
    factory::create_part_with_content(db, story.id, owner.id, 3, "third").await?;

    let repo = StoryPartRepository::new(db);
    repo.delete_and_close_gap(middle).await?;

    let remaining = repo.list_for_story(story.id).await?;
    let sequence: Vec<(i32, String)> = remaining
        .into_iter()
        .map(|p| (p.position, p.content))
        .collect();

    assert_eq!(
        sequence,
        vec![(1, "first".to_string()), (2, "third".to_string())]
    );

    Ok(())
}

/// Tests that deleting the last part touches no other positions.
#[tokio::test]
async fn deleting_last_part_keeps_sequence() -> Result<(), DbErr> {
    let test = part_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;

    factory::create_part(db, story.id, owner.id, 1).await?;
    let last = factory::create_part(db, story.id, owner.id, 2).await?;

    let repo = StoryPartRepository::new(db);
    repo.delete_and_close_gap(last).await?;

    let remaining = repo.list_for_story(story.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].position, 1);

    Ok(())
}

/// Tests that parts of other stories are untouched by the shift.
#[tokio::test]
async fn leaves_other_stories_alone() -> Result<(), DbErr> {
    let test = part_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;
    let other = factory::create_story(db, owner.id).await?;

    let target = factory::create_part(db, story.id, owner.id, 1).await?;
    factory::create_part(db, other.id, owner.id, 1).await?;
    factory::create_part(db, other.id, owner.id, 2).await?;

    let repo = StoryPartRepository::new(db);
    repo.delete_and_close_gap(target).await?;

    let untouched = repo.list_for_story(other.id).await?;
    let positions: Vec<i32> = untouched.iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![1, 2]);

    Ok(())
}
