//! Rankings and combined search over the catalog.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        advanced::{SentimentGameDto, TopEnrichedGameDto, TopGameDto, TopMetric, ValueGameDto},
        game::GameSummaryDto,
    },
    server::{
        data::game::GameRepository,
        error::AppError,
        model::game::{round2, Game, GameFilter},
        service::{
            game::GameService,
            steam::{price_gbp, SteamService},
        },
        util::pagination::PageParams,
    },
};

/// Candidate pool of the value ranking, as a multiple of the requested limit.
const VALUE_POOL_FACTOR: u64 = 100;

/// Prices below this are treated as this when scoring value.
const VALUE_PRICE_FLOOR: f64 = 0.5;

/// Value for money: positive ratio per pound, scaled by 100.
///
/// `None` without storefront reviews.
pub fn value_score(game: &Game) -> Option<f64> {
    let ratio = game.positive_ratio()?;
    Some(round2(ratio / game.price.max(VALUE_PRICE_FLOOR) * 100.0))
}

pub struct AdvancedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdvancedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Parses a metric name.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Metric outside `positive`, `metacritic_score`, `peak_ccu`
    pub fn parse_metric(metric: Option<&str>) -> Result<TopMetric, AppError> {
        match metric {
            None => Ok(TopMetric::default()),
            Some(m) => {
                TopMetric::parse(m.trim()).ok_or_else(|| AppError::BadRequest("Invalid metric".to_string()))
            }
        }
    }

    pub async fn top(&self, metric: TopMetric, limit: u64) -> Result<Vec<TopGameDto>, AppError> {
        let games = GameRepository::new(self.db).top_by(metric, limit).await?;
        Ok(games.into_iter().map(Game::into_top).collect())
    }

    /// Games ranked by positive percentage.
    pub async fn sentiment(&self, limit: u64) -> Result<Vec<SentimentGameDto>, AppError> {
        let mut ranked: Vec<SentimentGameDto> = GameRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(Game::into_sentiment)
            .collect();

        ranked.sort_by(|a, b| {
            b.positive_percent
                .total_cmp(&a.positive_percent)
                .then(a.appid.cmp(&b.appid))
        });
        ranked.truncate(limit as usize);

        Ok(ranked)
    }

    /// Paid games ranked by [`value_score`].
    pub async fn value(&self, limit: u64) -> Result<Vec<ValueGameDto>, AppError> {
        let pool = GameRepository::new(self.db)
            .get_paid(limit.saturating_mul(VALUE_POOL_FACTOR))
            .await?;

        let mut ranked: Vec<ValueGameDto> = pool
            .into_iter()
            .filter_map(|game| {
                let score = value_score(&game)?;
                Some(game.into_value(score))
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.value_score
                .total_cmp(&a.value_score)
                .then(a.appid.cmp(&b.appid))
        });
        ranked.truncate(limit as usize);

        Ok(ranked)
    }

    pub async fn search(
        &self,
        filter: &GameFilter,
        params: &PageParams,
    ) -> Result<(Vec<GameSummaryDto>, u64), AppError> {
        GameService::new(self.db).filter(filter, params).await
    }

    /// The top ranking with storefront prices attached.
    ///
    /// A game whose Steam lookup fails keeps `price_overview` and `price_gbp` empty.
    pub async fn top_enriched(
        &self,
        metric: TopMetric,
        limit: u64,
        steam: &SteamService<'_>,
    ) -> Result<Vec<TopEnrichedGameDto>, AppError> {
        let top = self.top(metric, limit).await?;

        let mut enriched = Vec::with_capacity(top.len());
        for game in top {
            let price_overview = steam.price_overview(game.appid).await;
            let price_gbp = price_overview.as_ref().and_then(price_gbp);
            enriched.push(TopEnrichedGameDto {
                game,
                price_overview,
                price_gbp,
            });
        }

        Ok(enriched)
    }
}
