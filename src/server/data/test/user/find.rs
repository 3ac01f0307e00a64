use super::*;

/// Tests each lookup path.
///
/// Expected: Ok(Some) by id, username and provider subject
#[tokio::test]
async fn finds_user_by_each_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::user::UserFactory::new(db)
        .username("dave")
        .provider_subject("sub-9")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_id(created.id).await?.map(|u| u.username), Some("dave".to_string()));
    assert_eq!(repo.find_by_username("dave").await?.map(|u| u.id), Some(created.id));
    assert_eq!(repo.find_by_provider_subject("sub-9").await?.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests lookups that match nothing.
///
/// Expected: Ok(None) for every key
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(1).await?.is_none());
    assert!(repo.find_by_username("nobody").await?.is_none());
    assert!(repo.find_by_provider_subject("sub").await?.is_none());

    Ok(())
}
