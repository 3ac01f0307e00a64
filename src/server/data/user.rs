//! User data repository for database operations.
//!
//! Handles password accounts, identity-provider accounts and the admin existence
//! check used by the startup bootstrap.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    model::user::{ROLE_ADMIN, ROLE_USER},
    server::model::user::{CreateUserParams, User},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a password account.
    ///
    /// # Arguments
    /// - `params` - Normalized username, argon2 hash and requested role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a duplicate username
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let role = params.role().to_string();
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(Some(params.password_hash)),
            role: ActiveValue::Set(role),
            provider_subject: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Inserts an identity-provider account with the regular user role.
    pub async fn create_provider_user(
        &self,
        subject: String,
        username: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(None),
            role: ActiveValue::Set(ROLE_USER.to_string()),
            provider_subject: ActiveValue::Set(Some(subject)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;
        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their already normalized username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;
        Ok(entity.map(User::from_entity))
    }

    /// Finds the account linked to an identity-provider subject.
    pub async fn find_by_provider_subject(&self, subject: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ProviderSubject.eq(subject))
            .one(self.db)
            .await?;
        Ok(entity.map(User::from_entity))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(ROLE_ADMIN))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
