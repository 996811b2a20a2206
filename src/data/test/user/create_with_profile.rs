use super::*;

/// Tests that registration creates all three account rows.
///
/// Verifies that the repository inserts the user together with an empty
/// profile and a zeroed statistics row.
///
/// Expected: user, profile, and statistics rows all present
#[tokio::test]
async fn creates_user_profile_and_statistics() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create_with_profile(sample_param("reader", "reader@example.com")).await?;

    assert_eq!(user.login, "reader");
    assert_eq!(user.email, "reader@example.com");

    let profiles = entity::prelude::UserProfile::find().all(db).await?;
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].user_id, user.id);
    assert_eq!(profiles[0].description, "");

    let statistics = entity::prelude::UserStatistics::find().all(db).await?;
    assert_eq!(statistics.len(), 1);
    assert_eq!(statistics[0].user_id, user.id);
    assert_eq!(statistics[0].stories_started, 0);

    Ok(())
}

/// Tests that a duplicate email violates the unique constraint.
///
/// Expected: Err on the second insert, and only one user row remains
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create_with_profile(sample_param("first", "same@example.com")).await?;

    let result = repo
        .create_with_profile(sample_param("second", "same@example.com"))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
