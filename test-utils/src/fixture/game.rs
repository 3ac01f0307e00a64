//! Game fixtures for in-memory test data.
//!
//! List columns are stored as JSON arrays, so the builder takes `Vec<String>` and
//! encodes it the same way the repository does.

use chrono::{TimeZone, Utc};
use entity::game;

pub const DEFAULT_APPID: i64 = 10;
pub const DEFAULT_NAME: &str = "Counter-Strike";
pub const DEFAULT_RELEASE_DATE: &str = "Nov 1, 2000";
pub const DEFAULT_PRICE: f64 = 7.19;

/// Creates a game entity model with default values.
///
/// # Default Values
/// - appid: `10`
/// - name: `"Counter-Strike"`
/// - price: `7.19`
/// - developers and publishers: `["Valve"]`
/// - every other list column: `[]`
/// - counters: `0`
pub fn entity() -> game::Model {
    entity_builder().build()
}

/// Creates a game entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let game = fixture::game::entity_builder()
///     .appid(570)
///     .name("Dota 2")
///     .price(0.0)
///     .build();
/// ```
pub fn entity_builder() -> GameEntityBuilder {
    GameEntityBuilder::default()
}

pub struct GameEntityBuilder {
    model: game::Model,
}

fn encode(values: &[&str]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

fn encode_owned(values: Vec<String>) -> String {
    serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string())
}

impl Default for GameEntityBuilder {
    fn default() -> Self {
        Self {
            model: game::Model {
                appid: DEFAULT_APPID,
                name: DEFAULT_NAME.to_string(),
                release_date: DEFAULT_RELEASE_DATE.to_string(),
                price: DEFAULT_PRICE,
                short_description: None,
                detailed_description: None,
                about_the_game: None,
                header_image: None,
                website: None,
                support_url: None,
                developers: encode(&["Valve"]),
                publishers: encode(&["Valve"]),
                genres: encode(&[]),
                tags: encode(&[]),
                supported_languages: encode(&[]),
                screenshots: encode(&[]),
                movies: encode(&[]),
                positive: 0,
                negative: 0,
                pct_pos_total: None,
                metacritic_score: 0,
                peak_ccu: 0,
                average_playtime_forever: 0,
                median_playtime_forever: 0,
                average_playtime_2weeks: 0,
                median_playtime_2weeks: 0,
                created_by: None,
                created_at: Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap(),
                last_modified_by: None,
                last_modified_at: None,
            },
        }
    }
}

impl GameEntityBuilder {
    pub fn appid(mut self, appid: i64) -> Self {
        self.model.appid = appid;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn release_date(mut self, release_date: impl Into<String>) -> Self {
        self.model.release_date = release_date.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.model.price = price;
        self
    }

    pub fn developers(mut self, developers: Vec<String>) -> Self {
        self.model.developers = encode_owned(developers);
        self
    }

    pub fn publishers(mut self, publishers: Vec<String>) -> Self {
        self.model.publishers = encode_owned(publishers);
        self
    }

    pub fn genres(mut self, genres: Vec<String>) -> Self {
        self.model.genres = encode_owned(genres);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.model.tags = encode_owned(tags);
        self
    }

    pub fn supported_languages(mut self, languages: Vec<String>) -> Self {
        self.model.supported_languages = encode_owned(languages);
        self
    }

    /// Overwrites a list column with raw text, for exercising malformed data.
    pub fn raw_developers(mut self, raw: impl Into<String>) -> Self {
        self.model.developers = raw.into();
        self
    }

    pub fn reviews(mut self, positive: i64, negative: i64) -> Self {
        self.model.positive = positive;
        self.model.negative = negative;
        self
    }

    pub fn pct_pos_total(mut self, pct: Option<i32>) -> Self {
        self.model.pct_pos_total = pct;
        self
    }

    pub fn metacritic_score(mut self, score: i32) -> Self {
        self.model.metacritic_score = score;
        self
    }

    pub fn peak_ccu(mut self, peak_ccu: i64) -> Self {
        self.model.peak_ccu = peak_ccu;
        self
    }

    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.model.created_at = created_at;
        self
    }

    pub fn build(self) -> game::Model {
        self.model
    }
}
