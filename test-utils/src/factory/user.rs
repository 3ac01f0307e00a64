//! User factory for creating accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting users.
///
/// # Example
///
/// ```rust,ignore
/// let admin = UserFactory::new(&db)
///     .username("root")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: Option<String>,
    role: String,
    provider_subject: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Defaults: username `"user{id}"`, no password, role `"user"`, no provider subject.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            password_hash: None,
            role: "user".to_string(),
            provider_subject: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored PHC hash string. The factory does not hash anything.
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = Some(hash.into());
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.role = if admin { "admin" } else { "user" }.to_string();
        self
    }

    pub fn provider_subject(mut self, subject: impl Into<String>) -> Self {
        self.provider_subject = Some(subject.into());
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            provider_subject: ActiveValue::Set(self.provider_subject),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.username.starts_with("user"));
        assert_eq!(user.role, "user");
        assert!(user.password_hash.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_user(db).await?;
        let second = create_admin(db).await?;

        assert_ne!(first.username, second.username);
        assert_eq!(second.role, "admin");

        Ok(())
    }
}
