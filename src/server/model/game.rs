//! Game domain models and parameters.
//!
//! `Game` is the decoded form of a catalog row: list columns are parsed from their
//! stored JSON arrays at the repository boundary, so services only ever see
//! `Vec<String>`. Parameter types carry validated create, update and filter input
//! from controllers into the services.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        advanced::{AdvancedSearchQuery, SentimentGameDto, TopGameDto, ValueGameDto},
        developer::GameDevelopersDto,
        game::{
            CreateGameDto, GameDetailDto, GameFilterQuery, GameRefDto, GameReviewSummaryDto,
            GameSummaryDto, PlaytimeDto, UpdateGameDto, VALID_LANGUAGE_CODES,
        },
        misc::{MiscCompaniesDto, MiscDetailsDto, MiscGameDto, MiscStatsDto},
    },
    server::error::{internal::InternalError, AppError},
};

/// Storefront totals below this use the imported percentage as review score.
const MIN_REVIEWS_FOR_SCORE: i64 = 5;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Encodes a list column for storage.
pub fn encode_list(values: &[String]) -> Result<String, AppError> {
    Ok(serde_json::to_string(values)?)
}

/// Encodes one list entry the way it appears inside a stored list column, without
/// the surrounding quotes. Used to match stored lists with SQL `LIKE`.
pub fn encode_list_entry(value: &str) -> Result<String, AppError> {
    let quoted = serde_json::to_string(value)?;
    Ok(quoted
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(&quoted)
        .to_string())
}

fn decode_list(appid: i64, column: &'static str, raw: &str) -> Result<Vec<String>, AppError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|source| {
        InternalError::MalformedListColumn {
            appid,
            column,
            source,
        }
        .into()
    })
}

/// Average and median playtime in minutes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playtime {
    pub average_forever: i64,
    pub median_forever: i64,
    pub average_2weeks: i64,
    pub median_2weeks: i64,
}

/// A catalog game with decoded list fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub appid: i64,
    pub name: String,
    pub release_date: String,
    /// Price in GBP, 0 for free games.
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
    /// Storefront positive review count.
    pub positive: i64,
    /// Storefront negative review count.
    pub negative: i64,
    /// Storefront positive percentage, as imported.
    pub pct_pos_total: Option<i32>,
    pub metacritic_score: i32,
    pub peak_ccu: i64,
    pub playtime: Playtime,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_modified_by: Option<String>,
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Converts an entity model to a game domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Game)` - Decoded game
    /// - `Err(AppError::InternalErr(MalformedListColumn))` - A list column does not hold
    ///   a JSON array of strings
    pub fn from_entity(entity: entity::game::Model) -> Result<Self, AppError> {
        let appid = entity.appid;

        Ok(Self {
            appid,
            developers: decode_list(appid, "developers", &entity.developers)?,
            publishers: decode_list(appid, "publishers", &entity.publishers)?,
            genres: decode_list(appid, "genres", &entity.genres)?,
            tags: decode_list(appid, "tags", &entity.tags)?,
            supported_languages: decode_list(
                appid,
                "supported_languages",
                &entity.supported_languages,
            )?,
            screenshots: decode_list(appid, "screenshots", &entity.screenshots)?,
            movies: decode_list(appid, "movies", &entity.movies)?,
            name: entity.name,
            release_date: entity.release_date,
            price: entity.price,
            short_description: entity.short_description,
            detailed_description: entity.detailed_description,
            about_the_game: entity.about_the_game,
            header_image: entity.header_image,
            website: entity.website,
            support_url: entity.support_url,
            positive: entity.positive,
            negative: entity.negative,
            pct_pos_total: entity.pct_pos_total,
            metacritic_score: entity.metacritic_score,
            peak_ccu: entity.peak_ccu,
            playtime: Playtime {
                average_forever: entity.average_playtime_forever,
                median_forever: entity.median_playtime_forever,
                average_2weeks: entity.average_playtime_2weeks,
                median_2weeks: entity.median_playtime_2weeks,
            },
            created_by: entity.created_by,
            created_at: entity.created_at,
            last_modified_by: entity.last_modified_by,
            last_modified_at: entity.last_modified_at,
        })
    }

    pub fn total_reviews(&self) -> i64 {
        self.positive + self.negative
    }

    /// Share of positive storefront reviews in `0.0..=1.0`, `None` without reviews.
    pub fn positive_ratio(&self) -> Option<f64> {
        let total = self.total_reviews();
        (total > 0).then(|| self.positive as f64 / total as f64)
    }

    /// Listing score: the computed percentage once there are enough storefront
    /// reviews, otherwise the imported percentage.
    pub fn review_score(&self) -> Option<f64> {
        if self.total_reviews() >= MIN_REVIEWS_FOR_SCORE {
            self.positive_ratio().map(|ratio| round2(ratio * 100.0))
        } else {
            self.pct_pos_total.map(f64::from)
        }
    }

    /// Positive percentage rounded to two places, 0 without reviews.
    pub fn positive_percent(&self) -> f64 {
        self.positive_ratio()
            .map(|ratio| round2(ratio * 100.0))
            .unwrap_or(0.0)
    }

    /// Positive percentage preferring the imported storefront value.
    pub fn sentiment_percent(&self) -> f64 {
        match self.pct_pos_total {
            Some(pct) => f64::from(pct),
            None => self.positive_percent(),
        }
    }

    /// Value for money in the listing scale: `ratio / price * 1000`.
    ///
    /// `None` for free games and games without positive reviews.
    pub fn listing_value_score(&self) -> Option<f64> {
        let ratio = self.positive_ratio().filter(|r| *r > 0.0)?;
        (self.price > 0.0).then(|| round2(ratio / self.price * 1000.0))
    }

    pub fn as_ref_dto(&self) -> GameRefDto {
        GameRefDto {
            appid: self.appid,
            name: self.name.clone(),
        }
    }

    pub fn into_summary(self) -> GameSummaryDto {
        let review_score = self.review_score();
        GameSummaryDto {
            appid: self.appid,
            name: self.name,
            price: self.price,
            developers: self.developers,
            publishers: self.publishers,
            tags: self.tags,
            supported_languages: self.supported_languages,
            positive: self.positive,
            negative: self.negative,
            pct_pos_total: self.pct_pos_total,
            review_score,
            value_score: None,
            positive_percent: None,
        }
    }

    /// Converts to the full detail DTO with review statistics derived from rows.
    pub fn into_detail(self, reviews: GameReviewSummaryDto) -> GameDetailDto {
        GameDetailDto {
            appid: self.appid,
            name: self.name,
            release_date: self.release_date,
            price: self.price,
            short_description: self.short_description,
            detailed_description: self.detailed_description,
            about_the_game: self.about_the_game,
            header_image: self.header_image,
            website: self.website,
            support_url: self.support_url,
            developers: self.developers,
            publishers: self.publishers,
            genres: self.genres,
            tags: self.tags,
            supported_languages: self.supported_languages,
            screenshots: self.screenshots,
            movies: self.movies,
            positive: self.positive,
            negative: self.negative,
            metacritic_score: self.metacritic_score,
            peak_ccu: self.peak_ccu,
            playtime: PlaytimeDto {
                average_forever: self.playtime.average_forever,
                median_forever: self.playtime.median_forever,
                average_2weeks: self.playtime.average_2weeks,
                median_2weeks: self.playtime.median_2weeks,
            },
            reviews,
            created_by: self.created_by,
            created_at: self.created_at,
            last_modified_by: self.last_modified_by,
            last_modified_at: self.last_modified_at,
        }
    }

    pub fn into_misc(self) -> MiscGameDto {
        MiscGameDto {
            appid: self.appid,
            name: self.name,
            details: MiscDetailsDto {
                genres: self.genres,
                tags: self.tags,
                supported_languages: self.supported_languages,
            },
            stats: MiscStatsDto {
                peak_ccu: self.peak_ccu,
            },
            companies: MiscCompaniesDto {
                developers: self.developers,
                publishers: self.publishers,
            },
        }
    }

    pub fn into_developers_dto(self) -> GameDevelopersDto {
        GameDevelopersDto {
            appid: self.appid,
            name: self.name,
            developers: self.developers,
            publishers: self.publishers,
            support_url: self.support_url,
            website: self.website,
        }
    }

    pub fn into_top(self) -> TopGameDto {
        TopGameDto {
            appid: self.appid,
            name: self.name,
            price: self.price,
            positive: self.positive,
            negative: self.negative,
            metacritic_score: self.metacritic_score,
            peak_ccu: self.peak_ccu,
            developers: self.developers,
            genres: self.genres,
        }
    }

    pub fn into_sentiment(self) -> SentimentGameDto {
        let positive_percent = round2(self.sentiment_percent());
        SentimentGameDto {
            appid: self.appid,
            name: self.name,
            positive: self.positive,
            negative: self.negative,
            positive_percent,
            negative_percent: round2(100.0 - positive_percent),
        }
    }

    /// Converts to the value ranking DTO.
    ///
    /// # Arguments
    /// - `value_score` - Score computed by the caller's ranking formula
    pub fn into_value(self, value_score: f64) -> ValueGameDto {
        let positive_ratio = self.positive_percent();
        ValueGameDto {
            appid: self.appid,
            name: self.name,
            price: self.price,
            positive: self.positive,
            negative: self.negative,
            positive_ratio,
            value_score,
            developers: self.developers,
        }
    }
}

/// Parameters for inserting a game.
#[derive(Debug, Clone)]
pub struct CreateGameParams {
    pub appid: i64,
    pub name: String,
    pub release_date: String,
    pub price: f64,
    pub short_description: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub supported_languages: Vec<String>,
    pub peak_ccu: i64,
    /// Username of the admin creating the game.
    pub created_by: String,
}

impl CreateGameParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateGameParams)` - Trimmed parameters
    /// - `Err(AppError::BadRequest)` - Blank name or release date, or a negative price
    pub fn from_dto(dto: CreateGameDto, created_by: String) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        let release_date = dto.release_date.trim().to_string();
        if name.is_empty() || release_date.is_empty() || !dto.price.is_finite() || dto.price < 0.0
        {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }

        Ok(Self {
            appid: dto.appid,
            name,
            release_date,
            price: dto.price,
            short_description: dto.short_description.filter(|s| !s.trim().is_empty()),
            developers: clean_list(dto.developers),
            publishers: clean_list(dto.publishers),
            genres: clean_list(dto.genres),
            tags: clean_list(dto.tags),
            supported_languages: clean_list(dto.supported_languages),
            peak_ccu: dto.peak_ccu.unwrap_or(0).max(0),
            created_by,
        })
    }
}

/// Partial update of a game. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateGameParams {
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub price: Option<f64>,
    pub short_description: Option<String>,
    pub developers: Option<Vec<String>>,
    pub publishers: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub supported_languages: Option<Vec<String>>,
    pub peak_ccu: Option<i64>,
    pub positive: Option<i64>,
    pub negative: Option<i64>,
    pub metacritic_score: Option<i32>,
    /// Username recorded as `last_modified_by`.
    pub modified_by: String,
}

impl UpdateGameParams {
    /// Validates an update request.
    ///
    /// # Returns
    /// - `Ok(UpdateGameParams)` - Parameters with list fields cleaned
    /// - `Err(AppError::BadRequest)` - No fields given, or a negative price
    pub fn from_dto(dto: UpdateGameDto, modified_by: String) -> Result<Self, AppError> {
        if dto.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }
        if dto.price.is_some_and(|p| !p.is_finite() || p < 0.0) {
            return Err(AppError::BadRequest("Price must be numeric".to_string()));
        }

        Ok(Self {
            name: dto.name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            release_date: dto
                .release_date
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            price: dto.price,
            short_description: dto.short_description,
            developers: dto.developers.map(clean_list),
            publishers: dto.publishers.map(clean_list),
            genres: dto.genres.map(clean_list),
            tags: dto.tags.map(clean_list),
            supported_languages: dto.supported_languages.map(clean_list),
            peak_ccu: dto.peak_ccu,
            positive: dto.positive,
            negative: dto.negative,
            metacritic_score: dto.metacritic_score,
            modified_by,
        })
    }
}

/// Replacement values for a game's analytics metadata.
#[derive(Debug, Clone, Default)]
pub struct MiscFields {
    pub genres: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub supported_languages: Option<Vec<String>>,
    pub peak_ccu: Option<i64>,
}

impl MiscFields {
    /// Values that reset every misc field.
    pub fn cleared() -> Self {
        Self {
            genres: Some(Vec::new()),
            tags: Some(Vec::new()),
            supported_languages: Some(Vec::new()),
            peak_ccu: Some(0),
        }
    }
}

/// Columns accepted by `sort_by` on the filter endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameSortColumn {
    #[default]
    Name,
    Appid,
    Price,
    ReleaseDate,
    PeakCcu,
    MetacriticScore,
}

impl GameSortColumn {
    /// Parses a sort column, `None` for anything outside the whitelist.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(Self::Name),
            "appid" => Some(Self::Appid),
            "price" => Some(Self::Price),
            "release_date" => Some(Self::ReleaseDate),
            "peak_ccu" => Some(Self::PeakCcu),
            "metacritic_score" => Some(Self::MetacriticScore),
            _ => None,
        }
    }
}

/// Validated criteria for catalog search.
///
/// Text criteria are trimmed and dropped when blank.
#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub tag: Option<String>,
    pub developer: Option<String>,
    pub language: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub metacritic_min: Option<i32>,
    pub sort_by: GameSortColumn,
    pub descending: bool,
}

impl GameFilter {
    /// Builds filter criteria from the `/games/filter` query.
    ///
    /// An unknown `sort_by` falls back to name. Any `order` other than `desc` is
    /// ascending.
    ///
    /// # Returns
    /// - `Ok(GameFilter)` - Validated criteria
    /// - `Err(AppError::BadRequest)` - Language outside the supported list
    pub fn from_query(query: &GameFilterQuery) -> Result<Self, AppError> {
        let language = clean_text(&query.language).map(|l| l.to_lowercase());
        if let Some(language) = &language {
            if !VALID_LANGUAGE_CODES.contains(&language.as_str()) {
                return Err(AppError::BadRequest(format!(
                    "Invalid language code: {}",
                    language
                )));
            }
        }

        Ok(Self {
            name: clean_text(&query.name),
            genre: clean_text(&query.genre),
            tag: clean_text(&query.tag),
            developer: clean_text(&query.developer),
            language,
            price_min: query.price_min,
            price_max: query.price_max,
            metacritic_min: None,
            sort_by: query
                .sort_by
                .as_deref()
                .and_then(GameSortColumn::parse)
                .unwrap_or_default(),
            descending: query.order.as_deref().map(str::trim) == Some("desc"),
        })
    }
}

impl GameFilter {
    /// Builds criteria for the advanced search.
    ///
    /// Price defaults to `0..=1000` and the metacritic floor to 0. `q` matches the name.
    /// Results are ordered by metacritic score, highest first, unless `sort` or
    /// `order=asc` say otherwise.
    pub fn from_advanced(query: &AdvancedSearchQuery) -> Self {
        Self {
            name: clean_text(&query.q),
            genre: clean_text(&query.genre),
            tag: clean_text(&query.tag),
            developer: clean_text(&query.developer),
            language: None,
            price_min: Some(query.price_min.unwrap_or(0.0)),
            price_max: Some(query.price_max.unwrap_or(1000.0)),
            metacritic_min: Some(query.metacritic_min.unwrap_or(0)),
            sort_by: query
                .sort
                .as_deref()
                .and_then(GameSortColumn::parse)
                .unwrap_or(GameSortColumn::MetacriticScore),
            descending: query.order.as_deref().map(str::trim) != Some("asc"),
        }
    }
}

fn clean_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Trims entries and drops blanks and duplicates, keeping first occurrences.
pub fn clean_list(values: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !cleaned.iter().any(|v| v == value) {
            cleaned.push(value.to_string());
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    fn game(positive: i64, negative: i64, pct: Option<i32>, price: f64) -> Game {
        let entity = fixture::game::entity_builder()
            .reviews(positive, negative)
            .pct_pos_total(pct)
            .price(price)
            .build();
        Game::from_entity(entity).unwrap()
    }

    #[test]
    fn decodes_list_columns() {
        let entity = fixture::game::entity_builder()
            .genres(vec!["Action".to_string(), "FPS".to_string()])
            .build();

        let game = Game::from_entity(entity).unwrap();

        assert_eq!(game.developers, vec!["Valve"]);
        assert_eq!(game.genres, vec!["Action", "FPS"]);
        assert!(game.tags.is_empty());
    }

    #[test]
    fn rejects_malformed_list_column() {
        let entity = fixture::game::entity_builder()
            .raw_developers("['Valve'")
            .build();

        let result = Game::from_entity(entity);

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::MalformedListColumn {
                column: "developers",
                ..
            }))
        ));
    }

    #[test]
    fn review_score_needs_five_reviews() {
        assert_eq!(game(2, 1, Some(88), 1.0).review_score(), Some(88.0));
        assert_eq!(game(2, 1, None, 1.0).review_score(), None);
        assert_eq!(game(2, 1, None, 1.0).positive_percent(), 66.67);
        assert_eq!(game(4, 2, Some(10), 1.0).review_score(), Some(66.67));
    }

    #[test]
    fn listing_value_score_skips_free_and_unreviewed() {
        assert_eq!(game(90, 10, None, 9.0).listing_value_score(), Some(100.0));
        assert_eq!(game(90, 10, None, 0.0).listing_value_score(), None);
        assert_eq!(game(0, 10, None, 5.0).listing_value_score(), None);
        assert_eq!(game(0, 0, None, 5.0).listing_value_score(), None);
    }

    #[test]
    fn sentiment_prefers_imported_percentage() {
        let dto = game(50, 50, Some(80), 1.0).into_sentiment();
        assert_eq!(dto.positive_percent, 80.0);
        assert_eq!(dto.negative_percent, 20.0);

        let dto = game(3, 1, None, 1.0).into_sentiment();
        assert_eq!(dto.positive_percent, 75.0);
    }

    #[test]
    fn create_params_validate_required_fields() {
        let dto = CreateGameDto {
            appid: 1,
            name: "  ".to_string(),
            release_date: "2020".to_string(),
            price: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            CreateGameParams::from_dto(dto, "admin".to_string()),
            Err(AppError::BadRequest(msg)) if msg == "Missing required fields"
        ));

        let dto = CreateGameDto {
            appid: 1,
            name: "Portal".to_string(),
            release_date: "2007".to_string(),
            price: -1.0,
            ..Default::default()
        };
        assert!(CreateGameParams::from_dto(dto, "admin".to_string()).is_err());

        let dto = CreateGameDto {
            appid: 1,
            name: " Portal ".to_string(),
            release_date: "2007".to_string(),
            price: 0.0,
            developers: vec![" Valve".to_string(), "Valve".to_string(), "".to_string()],
            ..Default::default()
        };
        let params = CreateGameParams::from_dto(dto, "admin".to_string()).unwrap();
        assert_eq!(params.name, "Portal");
        assert_eq!(params.developers, vec!["Valve"]);
    }

    #[test]
    fn update_params_reject_empty_and_negative_price() {
        assert!(matches!(
            UpdateGameParams::from_dto(UpdateGameDto::default(), "admin".to_string()),
            Err(AppError::BadRequest(msg)) if msg == "No fields to update"
        ));

        let dto = UpdateGameDto {
            price: Some(-3.0),
            ..Default::default()
        };
        assert!(matches!(
            UpdateGameParams::from_dto(dto, "admin".to_string()),
            Err(AppError::BadRequest(msg)) if msg == "Price must be numeric"
        ));
    }

    #[test]
    fn filter_validates_language_and_sort() {
        let query = GameFilterQuery {
            language: Some("Klingon".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            GameFilter::from_query(&query),
            Err(AppError::BadRequest(msg)) if msg == "Invalid language code: klingon"
        ));

        let query = GameFilterQuery {
            language: Some("English".to_string()),
            sort_by: Some("drop table".to_string()),
            order: Some("desc".to_string()),
            genre: Some(" ".to_string()),
            ..Default::default()
        };
        let filter = GameFilter::from_query(&query).unwrap();
        assert_eq!(filter.language.as_deref(), Some("english"));
        assert_eq!(filter.sort_by, GameSortColumn::Name);
        assert!(filter.descending);
        assert!(filter.genre.is_none());
    }

    #[test]
    fn advanced_filter_applies_defaults() {
        let filter = GameFilter::from_advanced(&AdvancedSearchQuery {
            q: Some(" portal ".to_string()),
            sort: Some("price".to_string()),
            ..Default::default()
        });

        assert_eq!(filter.name.as_deref(), Some("portal"));
        assert_eq!(filter.price_min, Some(0.0));
        assert_eq!(filter.price_max, Some(1000.0));
        assert_eq!(filter.metacritic_min, Some(0));
        assert_eq!(filter.sort_by, GameSortColumn::Price);
        assert!(filter.descending);

        let filter = GameFilter::from_advanced(&AdvancedSearchQuery::default());
        assert_eq!(filter.sort_by, GameSortColumn::MetacriticScore);
        assert!(filter.descending);

        let filter = GameFilter::from_advanced(&AdvancedSearchQuery {
            sort: Some("bogus".to_string()),
            order: Some("asc".to_string()),
            ..Default::default()
        });
        assert_eq!(filter.sort_by, GameSortColumn::MetacriticScore);
        assert!(!filter.descending);
    }

    #[test]
    fn list_entries_encode_like_stored_lists() {
        assert_eq!(encode_list_entry("Valve").unwrap(), "Valve");
        assert_eq!(encode_list_entry("\"Weird\" Studio").unwrap(), "\\\"Weird\\\" Studio");
        assert_eq!(encode_list_entry("Back\\Slash").unwrap(), "Back\\\\Slash");

        let stored = encode_list(&["\"Weird\" Studio".to_string()]).unwrap();
        assert!(stored.contains(&encode_list_entry("\"Weird\" Studio").unwrap()));
    }
}
