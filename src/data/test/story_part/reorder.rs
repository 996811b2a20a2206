use super::*;

/// Tests rewriting the position sequence to a supplied order.
///
/// Expected: the part at index i of the id list ends at position i + 1
#[tokio::test]
async fn rewrites_positions_in_given_order() -> Result<(), DbErr> {
    let test = part_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;

    let a = factory::create_part_with_content(db, story.id, owner.id, 1, "a").await?;
    let b = factory::create_part_with_content(db, story.id, owner.id, 2, "b").await?;
    let c = factory::create_part_with_content(db, story.id, owner.id, 3, "c").await?;

    let repo = StoryPartRepository::new(db);
    repo.reorder(story.id, &[c.id, a.id, b.id]).await?;

    let parts = repo.list_for_story(story.id).await?;
    let sequence: Vec<(i32, String)> = parts.into_iter().map(|p| (p.position, p.content)).collect();

    assert_eq!(
        sequence,
        vec![
            (1, "c".to_string()),
            (2, "a".to_string()),
            (3, "b".to_string()),
        ]
    );

    Ok(())
}
