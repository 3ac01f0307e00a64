//! Analytics metadata of games: genres, tags, languages and peak players.

use sea_orm::DatabaseConnection;

use crate::{
    model::misc::{MiscGameDto, UpdateMiscDto, UpsertMiscDto},
    server::{
        data::game::GameRepository,
        error::AppError,
        model::game::{clean_list, MiscFields},
        util::pagination::PageParams,
    },
};

fn not_found() -> AppError {
    AppError::NotFound("Misc entry not found".to_string())
}

pub struct MiscService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MiscService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of misc entries, newest created first.
    pub async fn list(&self, params: &PageParams) -> Result<(Vec<MiscGameDto>, u64), AppError> {
        let (games, total) = GameRepository::new(self.db)
            .get_newest_paginated(params)
            .await?;

        Ok((games.into_iter().map(|g| g.into_misc()).collect(), total))
    }

    pub async fn get(&self, appid: i64) -> Result<MiscGameDto, AppError> {
        GameRepository::new(self.db)
            .find_by_appid(appid)
            .await?
            .map(|g| g.into_misc())
            .ok_or_else(not_found)
    }

    /// Replaces a game's misc fields, creating the game when it does not exist.
    ///
    /// # Returns
    /// - `Ok((entry, true))` - A new game was created
    /// - `Ok((entry, false))` - An existing game was updated
    /// - `Err(AppError::BadRequest)` - The game is new and no name was given
    pub async fn upsert(
        &self,
        dto: UpsertMiscDto,
        actor: &str,
    ) -> Result<(MiscGameDto, bool), AppError> {
        let game_repo = GameRepository::new(self.db);

        let fields = MiscFields {
            genres: Some(clean_list(dto.genres)),
            tags: Some(clean_list(dto.tags)),
            supported_languages: Some(clean_list(dto.supported_languages)),
            peak_ccu: Some(dto.peak_ccu.max(0)),
        };

        if let Some(game) = game_repo
            .update_misc(dto.appid, fields.clone(), Some(actor.to_string()))
            .await?
        {
            return Ok((game.into_misc(), false));
        }

        let name = dto
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::BadRequest("Name is required for new games".to_string()))?;

        let game = game_repo
            .create_misc(dto.appid, name.to_string(), fields, actor.to_string())
            .await?;
        Ok((game.into_misc(), true))
    }

    /// Replaces only the misc fields present in `dto`.
    pub async fn update(
        &self,
        appid: i64,
        dto: UpdateMiscDto,
        actor: &str,
    ) -> Result<MiscGameDto, AppError> {
        if dto.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        let fields = MiscFields {
            genres: dto.genres.map(clean_list),
            tags: dto.tags.map(clean_list),
            supported_languages: dto.supported_languages.map(clean_list),
            peak_ccu: dto.peak_ccu.map(|p| p.max(0)),
        };

        GameRepository::new(self.db)
            .update_misc(appid, fields, Some(actor.to_string()))
            .await?
            .map(|g| g.into_misc())
            .ok_or_else(not_found)
    }

    /// Empties the list fields and resets peak players. The game itself stays.
    pub async fn clear(&self, appid: i64, actor: &str) -> Result<MiscGameDto, AppError> {
        GameRepository::new(self.db)
            .update_misc(appid, MiscFields::cleared(), Some(actor.to_string()))
            .await?
            .map(|g| g.into_misc())
            .ok_or_else(not_found)
    }
}
