//! Audit log repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::{
    model::action_log::{ActionLog, NewActionLog},
    util::pagination::PageParams,
};

pub struct ActionLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActionLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes an audit entry timestamped now.
    pub async fn create(&self, entry: NewActionLog) -> Result<ActionLog, DbErr> {
        let entity = entity::action_log::ActiveModel {
            user_id: ActiveValue::Set(entry.user_id),
            username: ActiveValue::Set(entry.username),
            role: ActiveValue::Set(entry.role),
            action: ActiveValue::Set(entry.action.as_str().to_string()),
            collection: ActiveValue::Set(entry.collection),
            target_id: ActiveValue::Set(entry.target_id),
            timestamp: ActiveValue::Set(Utc::now()),
            ip: ActiveValue::Set(entry.ip),
            details: ActiveValue::Set(entry.details.to_string()),
            endpoint: ActiveValue::Set(entry.endpoint),
            status: ActiveValue::Set(entry.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ActionLog::from_entity(entity))
    }

    /// Gets one page of audit entries, newest first.
    ///
    /// # Returns
    /// - `Ok((logs, total))` - Entries on the page and total number of entries
    pub async fn get_paginated(&self, params: &PageParams) -> Result<(Vec<ActionLog>, u64), DbErr> {
        let paginator = entity::prelude::ActionLog::find()
            .order_by_desc(entity::action_log::Column::Timestamp)
            .order_by_desc(entity::action_log::Column::Id)
            .paginate(self.db, params.page_size());
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(params.index()).await?;

        Ok((entities.into_iter().map(ActionLog::from_entity).collect(), total))
    }
}
