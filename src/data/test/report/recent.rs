use super::*;

/// Tests that summaries join the story and both accounts.
#[tokio::test]
async fn summary_carries_story_and_accounts() -> Result<(), DbErr> {
    let test = report_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let reporter = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;
    factory::create_report(db, story.id, reporter.id).await?;

    let summaries = ReportRepository::new(db).recent(10).await?;

    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    assert_eq!(summary.story_id, story.id);
    assert_eq!(summary.story_title, story.title);
    assert_eq!(summary.author_login, owner.login);
    assert_eq!(summary.reporter_login, reporter.login);
    assert_eq!(summary.reason.as_deref(), Some("spam"));

    Ok(())
}

/// Tests the listing limit.
///
/// Expected: twelve reports stored, ten returned
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = report_tables().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let story = factory::create_story(db, owner.id).await?;

    for _ in 0..12 {
        let reporter = factory::create_user(db).await?;
        factory::create_report(db, story.id, reporter.id).await?;
    }

    let summaries = ReportRepository::new(db).recent(10).await?;

    assert_eq!(summaries.len(), 10);

    Ok(())
}
