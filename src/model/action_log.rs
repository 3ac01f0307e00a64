use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ActionLogDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub username: String,
    pub role: String,
    pub action: String,
    pub collection: String,
    pub target_id: String,
    pub timestamp: DateTime<Utc>,
    pub ip: Option<String>,
    pub details: serde_json::Value,
    pub endpoint: String,
    pub status: String,
}
