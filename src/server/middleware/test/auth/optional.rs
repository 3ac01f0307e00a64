use super::*;

/// Tests anonymous requests.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_request_is_none() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let headers = HeaderMap::new();
    let tokens = tokens();

    let user = AuthGuard::new(db, &headers, session, &tokens)
        .optional()
        .await?;

    assert_eq!(user, None);

    Ok(())
}

/// Tests a garbage token is treated as anonymous.
///
/// Expected: Ok(None)
#[tokio::test]
async fn invalid_token_is_none() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let headers = bearer("not.a.jwt");
    let tokens = tokens();

    let user = AuthGuard::new(db, &headers, session, &tokens)
        .optional()
        .await?;

    assert_eq!(user, None);

    Ok(())
}

/// Tests a valid token resolves to its user.
///
/// Expected: Ok(Some(AuthUser))
#[tokio::test]
async fn valid_token_is_some() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let tokens = tokens();

    let user = User::from_entity(factory::user::create_user(db).await?);
    let headers = bearer(&tokens.issue(&user)?);

    let auth_user = AuthGuard::new(db, &headers, session, &tokens)
        .optional()
        .await?;

    assert_eq!(auth_user.map(|u| u.id), Some(user.id));

    Ok(())
}
