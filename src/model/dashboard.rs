use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TopPeakGameDto {
    pub name: String,
    pub appid: i64,
    pub peak_ccu: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DashboardStatsDto {
    pub total_games: u64,
    pub total_reviews: u64,
    pub recent_hour_reviews: u64,
    pub average_price: f64,
    pub top_peak_game: Option<TopPeakGameDto>,
}
