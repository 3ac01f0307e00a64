use super::*;

/// Tests a request without credentials.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_credentials() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let headers = HeaderMap::new();
    let tokens = tokens();

    let result = AuthGuard::new(db, &headers, session, &tokens)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests bearer authentication uses the token claims as identity.
///
/// The token user does not need to exist in the database.
///
/// Expected: Ok(AuthUser) carrying the claims and token expiry
#[tokio::test]
async fn accepts_valid_bearer_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let tokens = tokens();

    let user = User::from_entity(
        factory::user::UserFactory::new(db)
            .username("alice")
            .build()
            .await?,
    );
    let headers = bearer(&tokens.issue(&user)?);

    let auth_user = AuthGuard::new(db, &headers, session, &tokens)
        .require(&[])
        .await?;

    assert_eq!(auth_user.id, user.id);
    assert_eq!(auth_user.username, "alice");
    assert_eq!(auth_user.role, "user");
    assert!(auth_user.expires_at.is_some());

    Ok(())
}

/// Tests an expired bearer token is rejected even with a session user present.
///
/// Expected: Err(AuthError::TokenExpired)
#[tokio::test]
async fn rejects_expired_bearer_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = User::from_entity(factory::user::create_user(db).await?);
    AuthSession::new(session).set_user_id(user.id).await?;

    let expired = TokenService::new(SECRET, -1).issue(&user)?;
    let headers = bearer(&expired);
    let tokens = tokens();

    let result = AuthGuard::new(db, &headers, session, &tokens)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenExpired))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_bearer_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = User::from_entity(factory::user::create_user(db).await?);
    let headers = bearer(&TokenService::new("some-other-secret", 1).issue(&user)?);
    let tokens = tokens();

    let result = AuthGuard::new(db, &headers, session, &tokens)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests session authentication for identity-provider logins.
///
/// Expected: Ok(AuthUser) loaded from the database, without expiry
#[tokio::test]
async fn accepts_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let headers = HeaderMap::new();
    let tokens = tokens();

    let user = factory::user::UserFactory::new(db)
        .username("bob")
        .provider_subject("sub-1")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_user = AuthGuard::new(db, &headers, session, &tokens)
        .require(&[])
        .await?;

    assert_eq!(auth_user.id, user.id);
    assert_eq!(auth_user.username, "bob");
    assert_eq!(auth_user.expires_at, None);

    Ok(())
}

/// Tests a session pointing at a deleted user.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_session_user_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let headers = HeaderMap::new();
    let tokens = tokens();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, &headers, session, &tokens)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests the admin permission for an admin token.
///
/// Expected: Ok(AuthUser) with admin role
#[tokio::test]
async fn admin_passes_admin_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let tokens = tokens();

    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let headers = bearer(&tokens.issue(&admin)?);

    let auth_user = AuthGuard::new(db, &headers, session, &tokens)
        .require(&[Permission::Admin])
        .await?;

    assert!(auth_user.is_admin());

    Ok(())
}

/// Tests the admin permission for a regular user.
///
/// Expected: Err(AuthError::AdminRequired) naming the user
#[tokio::test]
async fn user_fails_admin_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::user::create_user(db).await?);
    let headers = bearer(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &headers, session, &tokens)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminRequired(id))) if id == user.id
    ));

    Ok(())
}
