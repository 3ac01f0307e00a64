use super::*;
use crate::{
    model::user::{LoginDto, RegisterDto},
    server::{
        data::user::UserRepository,
        error::auth::AuthError,
        service::{admin::code::AdminCodeService, auth::AuthService},
    },
};

fn register_dto(username: &str, role: Option<&str>, admin_code: Option<&str>) -> RegisterDto {
    RegisterDto {
        username: username.to_string(),
        password: "hunter22".to_string(),
        role: role.map(String::from),
        admin_code: admin_code.map(String::from),
    }
}

/// Tests registering a regular account.
///
/// Expected: username trimmed and lowercased, password hashed, role "user"
#[tokio::test]
async fn register_normalizes_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let user = AuthService::new(db, &codes)
        .register(register_dto("  GabeN ", None, None), false)
        .await?;

    assert_eq!(user.username, "gaben");
    assert!(!user.is_admin());
    let stored = UserRepository::new(db).find_by_username("gaben").await?.unwrap();
    assert_ne!(stored.password_hash.as_deref(), Some("hunter22"));

    let logged_in = AuthService::new(db, &codes)
        .login(LoginDto {
            username: "GABEN".to_string(),
            password: "hunter22".to_string(),
        })
        .await?;
    assert_eq!(logged_in.id, user.id);

    Ok(())
}

/// Tests registering a username that differs only in case and whitespace.
///
/// Expected: Err(UsernameTaken)
#[tokio::test]
async fn register_rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    service.register(register_dto("gaben", None, None), false).await?;
    let result = service.register(register_dto(" GABEN", None, None), false).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UsernameTaken))
    ));

    Ok(())
}

/// Tests registering with a blank username or password.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn register_requires_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    let blank_name = service.register(register_dto("   ", None, None), false).await;
    let mut no_password = register_dto("gaben", None, None);
    no_password.password.clear();
    let blank_password = service.register(no_password, false).await;

    assert!(matches!(blank_name, Err(AppError::BadRequest(_))));
    assert!(matches!(blank_password, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests requesting the admin role without a code or admin caller.
///
/// Expected: account created with role "user"
#[tokio::test]
async fn register_admin_without_code_falls_back_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    codes.generate().await;
    let service = AuthService::new(db, &codes);

    let plain = service
        .register(register_dto("mallory", Some("admin"), None), false)
        .await?;
    let wrong_code = service
        .register(register_dto("trudy", Some("admin"), Some("not-the-code")), false)
        .await?;

    assert!(!plain.is_admin());
    assert!(!wrong_code.is_admin());

    Ok(())
}

/// Tests registering with the bootstrap code.
///
/// Expected: admin granted once, the code is consumed
#[tokio::test]
async fn register_with_bootstrap_code_grants_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let code = codes.generate().await;
    let service = AuthService::new(db, &codes);

    let first = service
        .register(register_dto("root", Some("admin"), Some(&code)), false)
        .await?;
    let second = service
        .register(register_dto("toor", Some("admin"), Some(&code)), false)
        .await?;

    assert!(first.is_admin());
    assert!(!second.is_admin());
    assert!(!codes.has_valid_code().await);

    Ok(())
}

/// Tests an admin caller registering another admin.
///
/// Expected: admin granted without a code
#[tokio::test]
async fn register_admin_by_admin_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let user = AuthService::new(db, &codes)
        .register(register_dto("moderator", Some("admin"), None), true)
        .await?;

    assert!(user.is_admin());

    Ok(())
}
