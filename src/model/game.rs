use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

/// Languages accepted by the `language` filter.
pub const VALID_LANGUAGE_CODES: [&str; 12] = [
    "english",
    "spanish",
    "french",
    "german",
    "italian",
    "japanese",
    "korean",
    "russian",
    "portuguese",
    "chinese",
    "arabic",
    "turkish",
];

/// Minimal reference to a game used inside other payloads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameRefDto {
    pub appid: i64,
    pub name: String,
}

/// Row of the catalog listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameSummaryDto {
    pub appid: i64,
    pub name: String,
    pub price: f64,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub tags: Vec<String>,
    pub supported_languages: Vec<String>,
    pub positive: i64,
    pub negative: i64,
    pub pct_pos_total: Option<i32>,
    pub review_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_percent: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PlaytimeDto {
    pub average_forever: i64,
    pub median_forever: i64,
    pub average_2weeks: i64,
    pub median_2weeks: i64,
}

/// Review statistics derived from stored review rows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameReviewSummaryDto {
    pub num_reviews_total: u64,
    pub positive: u64,
    pub negative: u64,
    pub pct_pos_total: Option<i32>,
    pub review_snippet: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameDetailDto {
    pub appid: i64,
    pub name: String,
    pub release_date: String,
    pub price: f64,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub about_the_game: Option<String>,
    pub header_image: Option<String>,
    pub website: Option<String>,
    pub support_url: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub supported_languages: Vec<String>,
    pub screenshots: Vec<String>,
    pub movies: Vec<String>,
    pub positive: i64,
    pub negative: i64,
    pub metacritic_score: i32,
    pub peak_ccu: i64,
    pub playtime: PlaytimeDto,
    pub reviews: GameReviewSummaryDto,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified_by: Option<String>,
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl GameDetailDto {
    pub fn as_ref_dto(&self) -> GameRefDto {
        GameRefDto {
            appid: self.appid,
            name: self.name.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateGameDto {
    pub appid: i64,
    pub name: String,
    pub release_date: String,
    pub price: f64,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub supported_languages: Vec<String>,
    #[serde(default)]
    pub peak_ccu: Option<i64>,
}

/// Partial update; absent fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateGameDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_ccu: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metacritic_score: Option<i32>,
}

impl UpdateGameDto {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameCreatedDto {
    pub message: String,
    pub appid: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameStatsDto {
    pub total_games: u64,
    pub average_price: f64,
    pub top_peak_game: String,
    pub top_peak_ccu: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ImageUrlsDto {
    pub header: String,
    pub capsule_616x353: String,
    pub library_600x900: String,
    pub library_hero: String,
    pub logo: String,
}

impl ImageUrlsDto {
    pub fn for_appid(appid: i64) -> Self {
        let base = format!("https://cdn.cloudflare.steamstatic.com/steam/apps/{}", appid);
        Self {
            header: format!("{}/header.jpg", base),
            capsule_616x353: format!("{}/capsule_616x353.jpg", base),
            library_600x900: format!("{}/library_600x900.jpg", base),
            library_hero: format!("{}/library_hero.jpg", base),
            logo: format!("{}/logo.png", base),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct EnrichedGameDto {
    #[serde(flatten)]
    pub game: GameDetailDto,
    pub steam_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_error: Option<String>,
    pub image_urls: ImageUrlsDto,
}

/// Sort modes for the main catalog listing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum GameSort {
    #[default]
    #[serde(rename = "default", alias = "")]
    Default,
    #[serde(rename = "topRated")]
    TopRated,
    #[serde(rename = "value")]
    Value,
    #[serde(rename = "sentiment")]
    Sentiment,
}

impl GameSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameSort::Default => "default",
            GameSort::TopRated => "topRated",
            GameSort::Value => "value",
            GameSort::Sentiment => "sentiment",
        }
    }

    pub fn from_query(value: &str) -> Self {
        match value {
            "topRated" => GameSort::TopRated,
            "value" => GameSort::Value,
            "sentiment" => GameSort::Sentiment,
            _ => GameSort::Default,
        }
    }
}

/// Query for `/games/filter`, shared so the client can mirror it into the URL.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct GameFilterQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pn: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ps: Option<u64>,
}

impl GameFilterQuery {
    /// Key/value pairs of every set field, in a stable order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let text = [
            ("name", &self.name),
            ("genre", &self.genre),
            ("tag", &self.tag),
            ("developer", &self.developer),
            ("language", &self.language),
            ("sort_by", &self.sort_by),
            ("order", &self.order),
        ];
        for (key, value) in text {
            if let Some(v) = value.as_ref().filter(|v| !v.trim().is_empty()) {
                pairs.push((key, v.trim().to_string()));
            }
        }
        if let Some(v) = self.price_min {
            pairs.push(("price_min", v.to_string()));
        }
        if let Some(v) = self.price_max {
            pairs.push(("price_max", v.to_string()));
        }
        if let Some(v) = self.pn {
            pairs.push(("pn", v.to_string()));
        }
        if let Some(v) = self.ps {
            pairs.push(("ps", v.to_string()));
        }
        pairs
    }

    /// True when no filter criteria (ignoring paging and ordering) are set.
    pub fn has_criteria(&self) -> bool {
        self.pairs()
            .iter()
            .any(|(k, _)| !matches!(*k, "sort_by" | "order" | "pn" | "ps"))
    }
}

/// Formats a price the way the storefront shows it.
///
/// A storefront `final_formatted` string wins; otherwise zero is "Free" and
/// anything else is rendered in pounds.
pub fn format_price(price: f64, final_formatted: Option<&str>) -> String {
    if let Some(formatted) = final_formatted.filter(|f| !f.is_empty()) {
        return formatted.to_string();
    }
    if price <= 0.0 {
        "Free".to_string()
    } else {
        format!("£{:.2}", price)
    }
}

/// Picks the review score shown in listings and clamps it into 0..=100.
///
/// Order of preference: explicit score, positive share of the total,
/// storefront percentage, then the sentiment percentage.
pub fn display_review_score(game: &GameSummaryDto) -> Option<f64> {
    let total = game.positive + game.negative;
    let score = game
        .review_score
        .or_else(|| (total > 0).then(|| game.positive as f64 / total as f64 * 100.0))
        .or(game.pct_pos_total.map(f64::from))
        .or(game.positive_percent)?;

    Some(score.clamp(0.0, 100.0))
}

/// Joins list values for comma-separated form inputs.
pub fn join_list(values: &[String]) -> String {
    values.join(", ")
}

/// Splits a comma-separated form input into trimmed non-empty values.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> GameSummaryDto {
        GameSummaryDto {
            appid: 10,
            name: "Counter-Strike".to_string(),
            price: 7.19,
            developers: vec!["Valve".to_string()],
            publishers: vec!["Valve".to_string()],
            tags: vec![],
            supported_languages: vec![],
            positive: 0,
            negative: 0,
            pct_pos_total: None,
            review_score: None,
            value_score: None,
            positive_percent: None,
        }
    }

    #[test]
    fn format_price_prefers_storefront_string() {
        assert_eq!(format_price(7.19, Some("£5.99")), "£5.99");
        assert_eq!(format_price(0.0, None), "Free");
        assert_eq!(format_price(7.1, None), "£7.10");
        assert_eq!(format_price(3.0, Some("")), "£3.00");
    }

    #[test]
    fn review_score_falls_back_in_order() {
        let mut game = summary();
        assert_eq!(display_review_score(&game), None);

        game.positive_percent = Some(40.0);
        assert_eq!(display_review_score(&game), Some(40.0));

        game.pct_pos_total = Some(70);
        assert_eq!(display_review_score(&game), Some(70.0));

        game.positive = 3;
        game.negative = 1;
        assert_eq!(display_review_score(&game), Some(75.0));

        game.review_score = Some(130.0);
        assert_eq!(display_review_score(&game), Some(100.0));
    }

    #[test]
    fn filter_pairs_skip_blank_values() {
        let query = GameFilterQuery {
            name: Some("  portal ".to_string()),
            genre: Some("   ".to_string()),
            price_max: Some(20.0),
            pn: Some(2),
            ..Default::default()
        };

        assert_eq!(
            query.pairs(),
            vec![
                ("name", "portal".to_string()),
                ("price_max", "20".to_string()),
                ("pn", "2".to_string())
            ]
        );
        assert!(query.has_criteria());

        let paging_only = GameFilterQuery {
            pn: Some(3),
            order: Some("desc".to_string()),
            ..Default::default()
        };
        assert!(!paging_only.has_criteria());
    }

    #[test]
    fn split_list_trims_and_drops_empty() {
        assert_eq!(
            split_list(" Valve, ,Hidden Path ,"),
            vec!["Valve".to_string(), "Hidden Path".to_string()]
        );
        assert_eq!(join_list(&split_list("a,b")), "a, b");
    }

    #[test]
    fn sort_parses_known_modes() {
        assert_eq!(GameSort::from_query("topRated"), GameSort::TopRated);
        assert_eq!(GameSort::from_query("value"), GameSort::Value);
        assert_eq!(GameSort::from_query("nonsense"), GameSort::Default);
    }
}
