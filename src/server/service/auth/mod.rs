//! Username and password accounts.
//!
//! Registration normalizes the username, stores an argon2 hash and decides the
//! role. The admin role is only granted to a caller that is already an admin or
//! that presents the bootstrap code generated at startup.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, RegisterDto, ROLE_ADMIN},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{normalize_username, CreateUserParams, User},
        service::admin::code::AdminCodeService,
    },
};

pub mod password;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin_code_service: &'a AdminCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, admin_code_service: &'a AdminCodeService) -> Self {
        Self {
            db,
            admin_code_service,
        }
    }

    /// Registers a password account.
    ///
    /// # Arguments
    /// - `dto` - Requested username, password, and optionally role and bootstrap code
    /// - `caller_is_admin` - Whether the request carried an admin bearer token
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Blank username or password
    /// - `Err(AppError::AuthErr(UsernameTaken))` - Username already registered
    pub async fn register(&self, dto: RegisterDto, caller_is_admin: bool) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let username = normalize_username(&dto.username);
        if username.is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }

        if user_repo.find_by_username(&username).await?.is_some() {
            return Err(AuthError::UsernameTaken.into());
        }

        let wants_admin = dto
            .role
            .as_deref()
            .is_some_and(|role| role.trim().eq_ignore_ascii_case(ROLE_ADMIN))
            || dto.admin_code.is_some();

        let admin = if !wants_admin {
            false
        } else if caller_is_admin {
            true
        } else {
            match dto.admin_code.as_deref() {
                Some(code) => self.admin_code_service.validate_and_consume(code).await,
                None => false,
            }
        };

        if wants_admin && !admin {
            tracing::warn!(
                "Admin role requested for '{}' without a valid code, registering as user",
                username
            );
        }

        let user = user_repo
            .create(CreateUserParams {
                username,
                password_hash: password::hash_password(&dto.password)?,
                admin,
            })
            .await?;

        if admin {
            tracing::info!("User {} has been registered as admin", user.username);
        }

        Ok(user)
    }

    /// Checks a username and password.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user, provider-only
    ///   account or wrong password
    pub async fn login(&self, dto: LoginDto) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let username = normalize_username(&dto.username);
        let Some(user) = user_repo.find_by_username(&username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        let Some(hash) = user.password_hash.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(&dto.password, hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Loads the account a token or session refers to.
    ///
    /// # Returns
    /// - `Ok(User)` - Account exists
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Account was removed
    pub async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}
