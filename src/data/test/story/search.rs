use super::*;

fn search(query: Option<&str>, tags: Vec<&str>, viewer_id: Option<i32>) -> SearchParam {
    SearchParam {
        query: query.map(str::to_string),
        tags: tags.into_iter().map(str::to_string).collect(),
        page: 1,
        page_size: 10,
        viewer_id,
    }
}

/// Tests free-text matching against title and part content.
///
/// Expected: stories matching in either place are found, others are not
#[tokio::test]
async fn matches_title_and_part_content() -> Result<(), DbErr> {
    let test = story_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    let by_title = repo.create(create_param(owner.id, "The dragon's lair")).await?;
    let by_part = repo.create(create_param(owner.id, "Untitled")).await?;
    factory::create_part_with_content(db, by_part.id, owner.id, 1, "A dragon appears").await?;
    repo.create(create_param(owner.id, "Something else")).await?;

    let results = repo.search(search(Some("dragon"), vec![], None)).await?;

    assert_eq!(results.total, 2);
    let ids: Vec<i32> = results.results.iter().map(|s| s.id).collect();
    assert!(ids.contains(&by_title.id));
    assert!(ids.contains(&by_part.id));

    Ok(())
}

/// Tests the tag filter.
///
/// Expected: only stories carrying one of the requested tags are returned
#[tokio::test]
async fn filters_by_tag() -> Result<(), DbErr> {
    let test = story_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    let tagged = repo
        .create(CreateStoryParam {
            tags: vec!["fantasy".to_string()],
            ..create_param(owner.id, "Tagged")
        })
        .await?;
    repo.create(create_param(owner.id, "Untagged")).await?;

    let results = repo.search(search(None, vec!["fantasy"], None)).await?;

    assert_eq!(results.total, 1);
    assert_eq!(results.results[0].id, tagged.id);

    Ok(())
}

/// Tests that private stories are only visible to their owner.
///
/// Expected: anonymous and other viewers see only public stories; the owner
/// also sees their private one
#[tokio::test]
async fn hides_private_stories_from_other_viewers() -> Result<(), DbErr> {
    let test = story_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    test_utils::factory::story::StoryFactory::new(db, owner.id)
        .title("Secret")
        .public(false)
        .build()
        .await?;
    factory::create_story(db, owner.id).await?;

    let repo = StoryRepository::new(db);

    assert_eq!(repo.search(search(None, vec![], None)).await?.total, 1);
    assert_eq!(repo.search(search(None, vec![], Some(other.id))).await?.total, 1);
    assert_eq!(repo.search(search(None, vec![], Some(owner.id))).await?.total, 2);

    Ok(())
}

/// Tests pagination: total reflects all matches while the page is bounded.
///
/// Expected: total 5, page of 2, second page holds 2 more
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = story_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    for i in 0..5 {
        repo.create(create_param(owner.id, &format!("Story {}", i))).await?;
    }

    let page_one = repo
        .search(SearchParam {
            query: None,
            tags: Vec::new(),
            page: 1,
            page_size: 2,
            viewer_id: None,
        })
        .await?;

    assert_eq!(page_one.total, 5);
    assert_eq!(page_one.results.len(), 2);

    let page_three = repo
        .search(SearchParam {
            query: None,
            tags: Vec::new(),
            page: 3,
            page_size: 2,
            viewer_id: None,
        })
        .await?;

    assert_eq!(page_three.results.len(), 1);

    Ok(())
}
