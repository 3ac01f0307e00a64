use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        developer::{DeveloperDto, GameDevelopersDto},
        game::GameRefDto,
    },
    server::{
        data::game::GameRepository,
        error::AppError,
        model::game::clean_list,
        service::game::GameService,
        util::text::is_malformed_name,
    },
};

pub struct DeveloperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeveloperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every developer name with the games it appears on, sorted by name.
    ///
    /// Blank names and names that look like an unparsed list fragment are skipped.
    pub async fn list(&self) -> Result<Vec<DeveloperDto>, AppError> {
        let games = GameRepository::new(self.db).get_all().await?;

        let mut developers: BTreeMap<String, Vec<GameRefDto>> = BTreeMap::new();
        for game in &games {
            for name in &game.developers {
                let name = name.trim();
                if name.is_empty() || is_malformed_name(name) {
                    continue;
                }
                developers
                    .entry(name.to_string())
                    .or_default()
                    .push(game.as_ref_dto());
            }
        }

        Ok(developers
            .into_iter()
            .map(|(name, games)| DeveloperDto { name, games })
            .collect())
    }

    pub async fn for_game(&self, appid: i64) -> Result<GameDevelopersDto, AppError> {
        let game = GameService::new(self.db).get(appid).await?;
        Ok(game.into_developers_dto())
    }

    /// Renames a developer across the catalog.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of games whose developers list changed
    /// - `Err(AppError::BadRequest)` - Either name is blank
    pub async fn rename(&self, old_name: &str, new_name: &str) -> Result<u64, AppError> {
        let (old_name, new_name) = (old_name.trim(), new_name.trim());
        if old_name.is_empty() || new_name.is_empty() {
            return Err(AppError::BadRequest(
                "Both old_name and new_name are required.".to_string(),
            ));
        }

        self.rewrite(old_name, |developers| {
            developers
                .into_iter()
                .map(|d| {
                    if d.trim() == old_name {
                        new_name.to_string()
                    } else {
                        d
                    }
                })
                .collect()
        })
        .await
    }

    /// Removes a developer from every game.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of games the developer was removed from
    /// - `Err(AppError::BadRequest)` - Blank name
    pub async fn delete(&self, name: &str) -> Result<u64, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Developer name is required.".to_string(),
            ));
        }

        self.rewrite(name, |developers| {
            developers.into_iter().filter(|d| d.trim() != name).collect()
        })
        .await
    }

    /// Applies `edit` to the developers of each game listing `name` exactly.
    async fn rewrite<F>(&self, name: &str, edit: F) -> Result<u64, AppError>
    where
        F: Fn(Vec<String>) -> Vec<String>,
    {
        let game_repo = GameRepository::new(self.db);

        let mut changed = 0;
        for game in game_repo.get_by_developer_like(name).await? {
            if !game.developers.iter().any(|d| d.trim() == name) {
                continue;
            }

            let developers = clean_list(edit(game.developers));
            game_repo.set_developers(game.appid, &developers).await?;
            changed += 1;
        }

        Ok(changed)
    }
}
