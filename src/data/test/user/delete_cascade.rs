use super::*;

/// Tests that deleting a user removes the profile and statistics rows too.
///
/// Expected: Ok(true) and all three tables empty afterwards
#[tokio::test]
async fn removes_user_profile_and_statistics() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create_with_profile(sample_param("reader", "reader@example.com")).await?;

    let deleted = repo.delete_cascade(user.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserProfile::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserStatistics::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false), nothing removed
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete_cascade(999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that a profile update writes only the provided fields.
///
/// Expected: description changes, profile image keeps its value
#[tokio::test]
async fn partial_profile_update_keeps_other_fields() -> Result<(), DbErr> {
    let test = user_tables().await;
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create_with_profile(sample_param("reader", "reader@example.com")).await?;

    let updated = repo
        .update_profile(UpdateProfileParam {
            user_id: user.id,
            description: Some("About me".to_string()),
            profile_image: None,
        })
        .await?;
    assert!(updated);

    let (_, profile) = repo.find_with_profile(user.id).await?.unwrap();
    let profile = profile.unwrap();
    assert_eq!(profile.description, "About me");
    assert_eq!(profile.profile_image, "");

    Ok(())
}
