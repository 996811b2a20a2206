use super::*;

/// Tests finding an existing user by login.
///
/// Expected: Ok(Some(User)) with matching data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create_with_profile(sample_param("reader", "reader@example.com")).await?;

    let found = repo.find_by_login("reader").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().email, "reader@example.com");

    Ok(())
}

/// Tests querying for a login that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_login() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_login("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
