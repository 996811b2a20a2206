use super::*;

/// Tests inserting a report and checking for its existence.
#[tokio::test]
async fn inserts_and_detects_duplicates() -> Result<(), DbErr> {
    let test = report_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let reporter = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;

    let repo = ReportRepository::new(db);

    assert!(!repo.exists_for_story_and_user(story.id, reporter.id).await?);

    repo.insert(CreateReportParam {
        story_id: story.id,
        user_id: reporter.id,
        reason: Some("spam".to_string()),
        details: Some("copied content".to_string()),
    })
    .await?;

    assert!(repo.exists_for_story_and_user(story.id, reporter.id).await?);
    // A different reporter on the same story is not a duplicate.
    assert!(!repo.exists_for_story_and_user(story.id, owner.id).await?);

    Ok(())
}
