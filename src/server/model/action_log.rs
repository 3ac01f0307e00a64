//! Audit log domain models.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::action_log::ActionLogDto;

/// Username recorded when the acting user is unknown.
pub const UNKNOWN_USERNAME: &str = "unknown";

/// Mutating operations recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Create,
    Update,
    Delete,
    RenameDeveloper,
    DeleteDeveloper,
    CreateReview,
    UpdateReview,
    DeleteReview,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAction::Create => "CREATE",
            LogAction::Update => "UPDATE",
            LogAction::Delete => "DELETE",
            LogAction::RenameDeveloper => "RENAME_DEVELOPER",
            LogAction::DeleteDeveloper => "DELETE_DEVELOPER",
            LogAction::CreateReview => "CREATE_REVIEW",
            LogAction::UpdateReview => "UPDATE_REVIEW",
            LogAction::DeleteReview => "DELETE_REVIEW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Success,
    Failed,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Success => "success",
            LogStatus::Failed => "failed",
        }
    }
}

/// An audit entry to be written.
#[derive(Debug, Clone)]
pub struct NewActionLog {
    pub user_id: Option<i32>,
    pub username: String,
    pub role: String,
    pub action: LogAction,
    /// Table the action touched, e.g. `"game"` or `"review"`.
    pub collection: String,
    pub target_id: String,
    pub ip: Option<String>,
    /// Free-form JSON describing the change.
    pub details: Value,
    /// Method and path of the request, e.g. `"PUT /api/v1.0/games/10"`.
    pub endpoint: String,
    pub status: LogStatus,
}

/// A stored audit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionLog {
    pub id: i32,
    pub user_id: Option<i32>,
    pub username: String,
    pub role: String,
    pub action: String,
    pub collection: String,
    pub target_id: String,
    pub timestamp: DateTime<Utc>,
    pub ip: Option<String>,
    pub details: Value,
    pub endpoint: String,
    pub status: String,
}

impl ActionLog {
    /// Converts an entity model at the repository boundary.
    ///
    /// Details that are not valid JSON are kept as a JSON string.
    pub fn from_entity(entity: entity::action_log::Model) -> Self {
        let details = serde_json::from_str(&entity.details)
            .unwrap_or_else(|_| Value::String(entity.details.clone()));

        Self {
            id: entity.id,
            user_id: entity.user_id,
            username: entity.username,
            role: entity.role,
            action: entity.action,
            collection: entity.collection,
            target_id: entity.target_id,
            timestamp: entity.timestamp,
            ip: entity.ip,
            details,
            endpoint: entity.endpoint,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> ActionLogDto {
        ActionLogDto {
            id: self.id,
            user_id: self.user_id,
            username: self.username,
            role: self.role,
            action: self.action,
            collection: self.collection,
            target_id: self.target_id,
            timestamp: self.timestamp,
            ip: self.ip,
            details: self.details,
            endpoint: self.endpoint,
            status: self.status,
        }
    }
}
