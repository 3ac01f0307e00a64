use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{DashboardStatsDto, TopPeakGameDto},
    server::{
        data::{game::GameRepository, review::ReviewRepository},
        error::AppError,
        model::game::round2,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Catalog and review activity counters for the admin dashboard.
    pub async fn stats(&self) -> Result<DashboardStatsDto, AppError> {
        let game_repo = GameRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        let total_games = game_repo.count().await?;
        let total_reviews = review_repo.count().await?;
        let recent_hour_reviews = review_repo
            .count_since(Utc::now() - Duration::hours(1))
            .await?;
        let average_price = game_repo.average_price().await?.map(round2).unwrap_or(0.0);

        let top_peak_game = game_repo.top_peak().await?.map(|game| TopPeakGameDto {
            name: game.name,
            appid: game.appid,
            peak_ccu: game.peak_ccu,
        });

        Ok(DashboardStatsDto {
            total_games,
            total_reviews,
            recent_hour_reviews,
            average_price,
            top_peak_game,
        })
    }
}
