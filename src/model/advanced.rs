use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

/// Default size of the advanced rankings.
pub const DEFAULT_RANKING_LIMIT: u64 = 10;

/// Ranking metric accepted by `/games/advanced/top`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum TopMetric {
    #[default]
    Positive,
    MetacriticScore,
    PeakCcu,
}

impl TopMetric {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "positive" => Some(TopMetric::Positive),
            "metacritic_score" => Some(TopMetric::MetacriticScore),
            "peak_ccu" => Some(TopMetric::PeakCcu),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TopMetric::Positive => "positive",
            TopMetric::MetacriticScore => "metacritic_score",
            TopMetric::PeakCcu => "peak_ccu",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TopGameDto {
    pub appid: i64,
    pub name: String,
    pub price: f64,
    pub positive: i64,
    pub negative: i64,
    pub metacritic_score: i32,
    pub peak_ccu: i64,
    pub developers: Vec<String>,
    pub genres: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SentimentGameDto {
    pub appid: i64,
    pub name: String,
    pub positive: i64,
    pub negative: i64,
    pub positive_percent: f64,
    pub negative_percent: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ValueGameDto {
    pub appid: i64,
    pub name: String,
    pub price: f64,
    pub positive: i64,
    pub negative: i64,
    pub positive_ratio: f64,
    pub value_score: f64,
    pub developers: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TopEnrichedGameDto {
    #[serde(flatten)]
    pub game: TopGameDto,
    pub price_overview: Option<serde_json::Value>,
    pub price_gbp: Option<f64>,
}

/// Query of `/games/advanced/top` and `/games/advanced/top-enriched`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct TopQuery {
    /// One of `positive`, `metacritic_score`, `peak_ccu`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct LimitQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Combined search over name, companies, genres, tags, price and metacritic score.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct AdvancedSearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metacritic_min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pn: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ps: Option<u64>,
}
