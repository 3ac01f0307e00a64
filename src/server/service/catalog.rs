//! Bulk import of a Steam dataset dump into the catalog.
//!
//! The dump is one JSON object keyed by appid. Each value is a loosely typed game
//! record whose list fields may be arrays, stringified lists or tag maps.

use std::path::Path;

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::{ActiveValue, DatabaseConnection};
use serde_json::Value;

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::encode_list,
    util::{
        parse::parse_appid,
        text::{ensure_array, extract_tags, normalize_languages},
    },
};

/// `created_by` of imported rows.
pub const IMPORT_AUTHOR: &str = "import";

fn text(record: &Value, key: &str) -> Option<String> {
    match &record[key] {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn int(record: &Value, key: &str) -> i64 {
    match &record[key] {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn price(record: &Value) -> f64 {
    match &record["price"] {
        Value::Number(n) => n.as_f64().unwrap_or(0.0).max(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0).max(0.0),
        _ => 0.0,
    }
}

fn pct_pos_total(record: &Value) -> Option<i32> {
    record["pct_pos_total"]
        .as_i64()
        .filter(|pct| (0..=100).contains(pct))
        .map(|pct| pct as i32)
}

/// Builds a game row from one dataset record.
///
/// # Returns
/// - `Ok(None)` - The record has no name and is skipped
pub fn record_to_model(
    appid: i64,
    record: &Value,
) -> Result<Option<entity::game::ActiveModel>, AppError> {
    let Some(name) = text(record, "name") else {
        return Ok(None);
    };

    Ok(Some(entity::game::ActiveModel {
        appid: ActiveValue::Set(appid),
        name: ActiveValue::Set(name),
        release_date: ActiveValue::Set(text(record, "release_date").unwrap_or_default()),
        price: ActiveValue::Set(price(record)),
        short_description: ActiveValue::Set(text(record, "short_description")),
        detailed_description: ActiveValue::Set(text(record, "detailed_description")),
        about_the_game: ActiveValue::Set(text(record, "about_the_game")),
        header_image: ActiveValue::Set(text(record, "header_image")),
        website: ActiveValue::Set(text(record, "website")),
        support_url: ActiveValue::Set(text(record, "support_url")),
        developers: ActiveValue::Set(encode_list(&ensure_array(&record["developers"]))?),
        publishers: ActiveValue::Set(encode_list(&ensure_array(&record["publishers"]))?),
        genres: ActiveValue::Set(encode_list(&ensure_array(&record["genres"]))?),
        tags: ActiveValue::Set(encode_list(&extract_tags(&record["tags"]))?),
        supported_languages: ActiveValue::Set(encode_list(&normalize_languages(
            &record["supported_languages"],
        ))?),
        screenshots: ActiveValue::Set(encode_list(&ensure_array(&record["screenshots"]))?),
        movies: ActiveValue::Set(encode_list(&ensure_array(&record["movies"]))?),
        positive: ActiveValue::Set(int(record, "positive").max(0)),
        negative: ActiveValue::Set(int(record, "negative").max(0)),
        pct_pos_total: ActiveValue::Set(pct_pos_total(record)),
        metacritic_score: ActiveValue::Set(int(record, "metacritic_score") as i32),
        peak_ccu: ActiveValue::Set(int(record, "peak_ccu").max(0)),
        average_playtime_forever: ActiveValue::Set(int(record, "average_playtime_forever")),
        median_playtime_forever: ActiveValue::Set(int(record, "median_playtime_forever")),
        average_playtime_2weeks: ActiveValue::Set(int(record, "average_playtime_2weeks")),
        median_playtime_2weeks: ActiveValue::Set(int(record, "median_playtime_2weeks")),
        created_by: ActiveValue::Set(Some(IMPORT_AUTHOR.to_string())),
        created_at: ActiveValue::Set(Utc::now()),
        last_modified_by: ActiveValue::Set(None),
        last_modified_at: ActiveValue::Set(None),
    }))
}

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports a dataset file when the catalog is empty.
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Number of games imported
    /// - `Ok(None)` - The catalog already had games, nothing was read
    /// - `Err(AppError::IoErr | JsonErr)` - The file could not be read or parsed
    pub async fn seed_if_empty(&self, path: &Path) -> Result<Option<u64>, AppError> {
        if GameRepository::new(self.db).count().await? > 0 {
            return Ok(None);
        }

        let raw = tokio::fs::read_to_string(path).await?;
        let dataset: Value = serde_json::from_str(&raw)?;

        self.import(&dataset).await.map(Some)
    }

    /// Imports every record of a dataset object.
    ///
    /// Keys that are not appids and records without a name are skipped with a warning.
    pub async fn import(&self, dataset: &Value) -> Result<u64, AppError> {
        let Some(records) = dataset.as_object() else {
            return Err(AppError::BadRequest(
                "Dataset must be a JSON object keyed by appid".to_string(),
            ));
        };

        let mut rows = Vec::with_capacity(records.len());
        for (key, record) in records {
            let Ok(appid) = parse_appid(key) else {
                tracing::warn!("Skipping dataset entry with non-numeric appid {:?}", key);
                continue;
            };

            match record_to_model(appid, record)? {
                Some(row) => rows.push(row),
                None => tracing::warn!("Skipping app {} without a name", appid),
            }
        }

        GameRepository::new(self.db).insert_many(rows).await
    }
}
