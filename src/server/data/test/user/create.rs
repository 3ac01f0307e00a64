use super::*;

/// Tests creating a regular password account.
///
/// Expected: Ok with the user role and the hash stored
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "alice".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            admin: false,
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.role, "user");
    assert!(!user.is_admin());
    assert_eq!(user.password_hash.as_deref(), Some("$argon2id$stub"));

    Ok(())
}

/// Tests creating an admin account.
///
/// Expected: Ok with the admin role
#[tokio::test]
async fn creates_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "root".to_string(),
            password_hash: "hash".to_string(),
            admin: true,
        })
        .await?;

    assert!(user.is_admin());

    Ok(())
}

/// Tests the unique username constraint.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            admin: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests creating an identity-provider account.
///
/// Expected: Ok with no password and the subject linked
#[tokio::test]
async fn creates_provider_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create_provider_user("sub-123".to_string(), "carol".to_string())
        .await?;

    assert!(user.password_hash.is_none());
    assert_eq!(user.provider_subject.as_deref(), Some("sub-123"));
    assert_eq!(user.role, "user");

    Ok(())
}
