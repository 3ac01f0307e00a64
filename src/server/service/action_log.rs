//! Audit trail of mutating requests.

use axum::http::{HeaderMap, Method, Uri};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::{
    model::action_log::ActionLogDto,
    server::{
        data::action_log::ActionLogRepository,
        error::AppError,
        middleware::auth::AuthUser,
        model::action_log::{LogAction, LogStatus, NewActionLog, UNKNOWN_USERNAME},
        util::{pagination::PageParams, request::client_ip},
    },
};

/// Who made a request and where it came from.
#[derive(Debug, Clone)]
pub struct AuditContext {
    pub user_id: Option<i32>,
    pub username: String,
    pub role: String,
    pub ip: Option<String>,
    pub endpoint: String,
}

impl AuditContext {
    pub fn new(user: Option<&AuthUser>, headers: &HeaderMap, method: &Method, uri: &Uri) -> Self {
        Self {
            user_id: user.map(|u| u.id),
            username: user
                .map(|u| u.username.clone())
                .unwrap_or_else(|| UNKNOWN_USERNAME.to_string()),
            role: user
                .map(|u| u.role.clone())
                .unwrap_or_else(|| UNKNOWN_USERNAME.to_string()),
            ip: client_ip(headers),
            endpoint: format!("{} {}", method, uri.path()),
        }
    }
}

pub struct ActionLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActionLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes one audit entry.
    ///
    /// Failing to write is logged and never fails the audited request.
    pub async fn record(
        &self,
        ctx: &AuditContext,
        action: LogAction,
        collection: &str,
        target_id: impl ToString,
        details: Value,
        status: LogStatus,
    ) {
        let entry = NewActionLog {
            user_id: ctx.user_id,
            username: ctx.username.clone(),
            role: ctx.role.clone(),
            action,
            collection: collection.to_string(),
            target_id: target_id.to_string(),
            ip: ctx.ip.clone(),
            details,
            endpoint: ctx.endpoint.clone(),
            status,
        };

        if let Err(e) = ActionLogRepository::new(self.db).create(entry).await {
            tracing::warn!(
                "Failed to record {} on {} by {}: {}",
                action.as_str(),
                collection,
                ctx.username,
                e
            );
        }
    }

    /// Gets one page of audit entries, newest first.
    pub async fn list(&self, params: &PageParams) -> Result<(Vec<ActionLogDto>, u64), AppError> {
        let (logs, total) = ActionLogRepository::new(self.db)
            .get_paginated(params)
            .await?;

        Ok((logs.into_iter().map(|l| l.into_dto()).collect(), total))
    }
}
