//! Action log factory for audit trail rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting audit log entries.
pub struct ActionLogFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    username: String,
    action: String,
    collection: String,
    target_id: String,
    timestamp: DateTime<Utc>,
    status: String,
}

impl<'a> ActionLogFactory<'a> {
    /// Defaults: a successful `CREATE` on `games` by `"unknown"`, timestamped now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: None,
            username: "unknown".to_string(),
            action: "CREATE".to_string(),
            collection: "games".to_string(),
            target_id: "0".to_string(),
            timestamp: Utc::now(),
            status: "success".to_string(),
        }
    }

    pub fn user(mut self, user: &entity::user::Model) -> Self {
        self.user_id = Some(user.id);
        self.username = user.username.clone();
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn target_id(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = target_id.into();
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::action_log::Model, DbErr> {
        entity::action_log::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(self.username),
            role: ActiveValue::Set("admin".to_string()),
            action: ActiveValue::Set(self.action),
            collection: ActiveValue::Set(self.collection),
            target_id: ActiveValue::Set(self.target_id),
            timestamp: ActiveValue::Set(self.timestamp),
            ip: ActiveValue::Set(None),
            details: ActiveValue::Set("{}".to_string()),
            endpoint: ActiveValue::Set("/api/v1.0/games".to_string()),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_action_log(
    db: &DatabaseConnection,
) -> Result<entity::action_log::Model, DbErr> {
    ActionLogFactory::new(db).build().await
}
