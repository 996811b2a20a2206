use super::*;

/// Tests that the first part of a story takes position 1.
#[tokio::test]
async fn first_part_takes_position_one() -> Result<(), DbErr> {
    let test = part_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;

    let part = StoryPartRepository::new(db)
        .add(AddPartParam {
            story_id: story.id,
            author_id: owner.id,
            content: "Opening".to_string(),
        })
        .await?;

    assert_eq!(part.position, 1);

    Ok(())
}

/// Tests that new parts append after the current maximum position.
///
/// Expected: positions 1, 2, 3 in insertion order
#[tokio::test]
async fn appends_after_existing_parts() -> Result<(), DbErr> {
    let test = part_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;

    let repo = StoryPartRepository::new(db);
    for expected in 1..=3 {
        let part = repo
            .add(AddPartParam {
                story_id: story.id,
                author_id: owner.id,
                content: format!("Part {}", expected),
            })
            .await?;
        assert_eq!(part.position, expected);
    }

    Ok(())
}
