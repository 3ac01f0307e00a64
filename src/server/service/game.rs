//! Catalog listing, detail, search and game CRUD.

use std::cmp::Ordering;

use sea_orm::DatabaseConnection;

use crate::{
    model::game::{
        EnrichedGameDto, GameDetailDto, GameReviewSummaryDto, GameSort, GameStatsDto,
        GameSummaryDto, ImageUrlsDto,
    },
    server::{
        data::{
            game::{GameRepository, ListOrder},
            review::ReviewRepository,
        },
        error::AppError,
        model::{
            game::{round2, CreateGameParams, Game, GameFilter, UpdateGameParams},
            review::Review,
        },
        service::steam::SteamService,
        util::{
            pagination::{paginate_vec, PageParams},
            text::any_contains_word,
        },
    },
};

/// Summarizes stored review rows. The snippet is the newest comment.
///
/// # Arguments
/// - `reviews` - Reviews of the game, newest first
pub fn review_summary(game: &Game, reviews: &[Review]) -> GameReviewSummaryDto {
    let positive = reviews.iter().filter(|r| r.is_positive()).count() as u64;
    let total = reviews.len() as u64;

    GameReviewSummaryDto {
        num_reviews_total: total,
        positive,
        negative: total - positive,
        pct_pos_total: game.pct_pos_total,
        review_snippet: reviews.first().map(|r| r.comment.clone()),
    }
}

fn by_score_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    b.unwrap_or(f64::MIN).total_cmp(&a.unwrap_or(f64::MIN))
}

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the catalog in the requested sort mode.
    ///
    /// `Default` and `TopRated` page in SQL. `Value` and `Sentiment` rank the whole
    /// catalog in memory because their scores are derived.
    ///
    /// # Returns
    /// - `Ok((games, total))` - Summaries on the page and the number of ranked games
    pub async fn list(
        &self,
        sort: GameSort,
        params: &PageParams,
    ) -> Result<(Vec<GameSummaryDto>, u64), AppError> {
        let game_repo = GameRepository::new(self.db);

        match sort {
            GameSort::Default | GameSort::TopRated => {
                let order = if sort == GameSort::TopRated {
                    ListOrder::PositiveDesc
                } else {
                    ListOrder::AppidAsc
                };
                let (games, total) = game_repo.get_paginated(order, params).await?;
                Ok((games.into_iter().map(Game::into_summary).collect(), total))
            }
            GameSort::Value => {
                let mut ranked: Vec<GameSummaryDto> = game_repo
                    .get_all()
                    .await?
                    .into_iter()
                    .filter_map(|game| {
                        let value_score = game.listing_value_score()?;
                        let mut summary = game.into_summary();
                        summary.value_score = Some(value_score);
                        Some(summary)
                    })
                    .collect();
                ranked.sort_by(|a, b| {
                    by_score_desc(a.value_score, b.value_score).then(a.appid.cmp(&b.appid))
                });
                Ok(paginate_vec(ranked, params))
            }
            GameSort::Sentiment => {
                let mut ranked: Vec<GameSummaryDto> = game_repo
                    .get_all()
                    .await?
                    .into_iter()
                    .map(|game| {
                        let positive_percent = game.positive_percent();
                        let mut summary = game.into_summary();
                        summary.positive_percent = Some(positive_percent);
                        summary
                    })
                    .collect();
                ranked.sort_by(|a, b| {
                    by_score_desc(a.positive_percent, b.positive_percent)
                        .then(a.appid.cmp(&b.appid))
                });
                Ok(paginate_vec(ranked, params))
            }
        }
    }

    /// Finds a game or fails with 404 "Game not found".
    pub async fn get(&self, appid: i64) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .find_by_appid(appid)
            .await?
            .ok_or_else(AppError::game_not_found)
    }

    /// Gets the flattened detail of a game with review stats derived from its rows.
    pub async fn get_detail(&self, appid: i64) -> Result<GameDetailDto, AppError> {
        let game = self.get(appid).await?;
        let reviews = ReviewRepository::new(self.db).get_by_appid(appid).await?;

        let summary = review_summary(&game, &reviews);
        Ok(game.into_detail(summary))
    }

    /// Adds a game to the catalog.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game
    /// - `Err(AppError::BadRequest)` - A game with that appid already exists
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, AppError> {
        let game_repo = GameRepository::new(self.db);

        if game_repo.exists(params.appid).await? {
            return Err(AppError::BadRequest("Game already exists".to_string()));
        }

        game_repo.create(params).await
    }

    pub async fn update(&self, appid: i64, params: UpdateGameParams) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .update(appid, params)
            .await?
            .ok_or_else(AppError::game_not_found)
    }

    /// Deletes a game and its reviews.
    pub async fn delete(&self, appid: i64) -> Result<(), AppError> {
        if !GameRepository::new(self.db).delete(appid).await? {
            return Err(AppError::game_not_found());
        }
        Ok(())
    }

    /// Searches the catalog.
    ///
    /// Genre, tag, developer and language match whole words of any list entry,
    /// case-insensitively. Name is a case-insensitive substring match.
    pub async fn filter(
        &self,
        filter: &GameFilter,
        params: &PageParams,
    ) -> Result<(Vec<GameSummaryDto>, u64), AppError> {
        let candidates = GameRepository::new(self.db)
            .get_filter_candidates(filter)
            .await?;

        let mut matches = Vec::new();
        for game in candidates {
            if Self::matches(&game, filter)? {
                matches.push(game.into_summary());
            }
        }

        Ok(paginate_vec(matches, params))
    }

    fn matches(game: &Game, filter: &GameFilter) -> Result<bool, AppError> {
        if let Some(name) = &filter.name {
            if !game.name.to_lowercase().contains(&name.to_lowercase()) {
                return Ok(false);
            }
        }

        let word_criteria = [
            (&filter.genre, &game.genres),
            (&filter.tag, &game.tags),
            (&filter.developer, &game.developers),
            (&filter.language, &game.supported_languages),
        ];
        for (needle, values) in word_criteria {
            if let Some(needle) = needle {
                if !any_contains_word(values, needle)? {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Catalog-wide statistics.
    pub async fn stats(&self) -> Result<GameStatsDto, AppError> {
        let game_repo = GameRepository::new(self.db);

        let total_games = game_repo.count().await?;
        let average_price = game_repo.average_price().await?.map(round2).unwrap_or(0.0);
        let top = game_repo.top_peak().await?;

        Ok(GameStatsDto {
            total_games,
            average_price,
            top_peak_game: top
                .as_ref()
                .map(|g| g.name.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            top_peak_ccu: top.map(|g| g.peak_ccu).unwrap_or(0),
        })
    }

    /// Game detail combined with live storefront data.
    ///
    /// Steam failures are reported in `steam_error` and never fail the request.
    pub async fn get_enriched(
        &self,
        appid: i64,
        steam: &SteamService<'_>,
    ) -> Result<EnrichedGameDto, AppError> {
        let game = self.get_detail(appid).await?;

        let (steam_details, steam_error) = match steam.details(appid).await {
            Ok(cached) => (Some(cached.value), None),
            Err(e) => (None, Some(e.to_string())),
        };
        let steam_price = steam.fetch_price(appid).await;

        Ok(EnrichedGameDto {
            game,
            steam_price,
            steam_details,
            steam_error,
            image_urls: ImageUrlsDto::for_appid(appid),
        })
    }
}
