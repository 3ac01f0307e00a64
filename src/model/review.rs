use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    api::PageInfoDto,
    game::{GameDetailDto, GameRefDto},
};

/// Ratings at or above this value count as positive.
pub const POSITIVE_RATING_THRESHOLD: i32 = 50;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReviewDto {
    pub id: i32,
    pub appid: i64,
    pub username: String,
    pub comment: String,
    pub rating: i32,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<i32>,
}

impl ReviewDto {
    pub fn is_positive(&self) -> bool {
        self.rating >= POSITIVE_RATING_THRESHOLD
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateReviewDto {
    pub comment: String,
    pub rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateReviewDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReviewCreatedDto {
    pub message: String,
    pub review: ReviewDto,
    pub game: GameRefDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameReviewsDto {
    pub game: GameRefDto,
    pub reviews: Vec<ReviewDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GameWithReviewsDto {
    pub game: GameDetailDto,
    pub reviews: Vec<ReviewDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RatingDistributionDto {
    #[serde(rename = "0-20")]
    pub very_low: u64,
    #[serde(rename = "21-40")]
    pub low: u64,
    #[serde(rename = "41-60")]
    pub mixed: u64,
    #[serde(rename = "61-80")]
    pub high: u64,
    #[serde(rename = "81-100")]
    pub very_high: u64,
}

impl RatingDistributionDto {
    /// Buckets ratings into the five 20-point bands.
    pub fn from_ratings(ratings: impl IntoIterator<Item = i32>) -> Self {
        let mut dist = Self::default();
        for rating in ratings {
            match rating {
                i32::MIN..=20 => dist.very_low += 1,
                21..=40 => dist.low += 1,
                41..=60 => dist.mixed += 1,
                61..=80 => dist.high += 1,
                _ => dist.very_high += 1,
            }
        }
        dist
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReviewStatsDto {
    pub appid: i64,
    pub name: String,
    pub total_reviews: i64,
    pub positive: i64,
    pub negative: i64,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub average_rating: Option<f64>,
    pub metacritic_score: i32,
    pub rating_distribution: RatingDistributionDto,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ReviewFilter {
    #[default]
    All,
    Positive,
    Negative,
}

impl ReviewFilter {
    pub fn matches(&self, review: &ReviewDto) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Positive => review.is_positive(),
            ReviewFilter::Negative => !review.is_positive(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewFilter::All => "all",
            ReviewFilter::Positive => "positive",
            ReviewFilter::Negative => "negative",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ReviewSort {
    #[default]
    Date,
    Rating,
    Username,
}

impl ReviewSort {
    /// Sorts newest first, highest rating first, or username A-Z.
    pub fn apply(&self, reviews: &mut [ReviewDto]) {
        match self {
            ReviewSort::Date => reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ReviewSort::Rating => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
            ReviewSort::Username => reviews.sort_by(|a, b| {
                a.username
                    .to_lowercase()
                    .cmp(&b.username.to_lowercase())
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSort::Date => "date",
            ReviewSort::Rating => "rating",
            ReviewSort::Username => "username",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FilteredReviewsDto {
    pub game: GameRefDto,
    pub filter: ReviewFilter,
    pub sort: ReviewSort,
    pub count: usize,
    pub reviews: Vec<ReviewDto>,
}

/// Review flattened with the name of the game it belongs to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RecentReviewDto {
    #[serde(flatten)]
    pub review: ReviewDto,
    #[serde(rename = "gameName")]
    pub game_name: String,
    #[serde(rename = "gameAppid")]
    pub game_appid: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RecentReviewsDto {
    pub reviews: Vec<RecentReviewDto>,
    pub total_count: u64,
    pub recent_hour_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdminReviewsDto {
    pub reviews: Vec<RecentReviewDto>,
    pub pagination: PageInfoDto,
}

/// Badge class for a review rating.
pub fn rating_class(rating: i32) -> &'static str {
    if rating >= 75 {
        "badge-success"
    } else if rating >= POSITIVE_RATING_THRESHOLD {
        "badge-warning"
    } else {
        "badge-error"
    }
}

/// Positive/negative percentage split of a set of reviews.
///
/// Each side is rounded independently; the pair never sums above 100.
pub fn review_percentages(reviews: &[ReviewDto]) -> (u32, u32) {
    if reviews.is_empty() {
        return (0, 0);
    }
    let total = reviews.len() as f64;
    let positive = reviews.iter().filter(|r| r.is_positive()).count() as f64;
    let positive_pct = (positive / total * 100.0).round() as u32;
    let negative_pct = ((total - positive) / total * 100.0).round() as u32;

    if positive_pct + negative_pct > 100 {
        (positive_pct, 100 - positive_pct)
    } else {
        (positive_pct, negative_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn review(id: i32, username: &str, rating: i32, age_minutes: i64) -> ReviewDto {
        ReviewDto {
            id,
            appid: 10,
            username: username.to_string(),
            comment: "ok".to_string(),
            rating,
            created_by: None,
            created_at: Utc::now() - Duration::minutes(age_minutes),
            updated_at: None,
            updated_by: None,
        }
    }

    #[test]
    fn distribution_buckets_edges() {
        let dist = RatingDistributionDto::from_ratings([0, 20, 21, 40, 41, 60, 61, 80, 81, 100]);
        assert_eq!(dist.very_low, 2);
        assert_eq!(dist.low, 2);
        assert_eq!(dist.mixed, 2);
        assert_eq!(dist.high, 2);
        assert_eq!(dist.very_high, 2);
    }

    #[test]
    fn percentages_never_exceed_hundred() {
        let reviews = vec![review(1, "a", 90, 0), review(2, "b", 10, 0), review(3, "c", 55, 0)];
        let (pos, neg) = review_percentages(&reviews);
        assert_eq!(pos, 67);
        assert_eq!(neg, 33);

        // 1/8 = 12.5 and 7/8 = 87.5 both round up
        let mut eighths = vec![review(1, "a", 90, 0)];
        for i in 0..7 {
            eighths.push(review(i + 2, "b", 10, 0));
        }
        let (pos, neg) = review_percentages(&eighths);
        assert!(pos + neg <= 100);

        assert_eq!(review_percentages(&[]), (0, 0));
    }

    #[test]
    fn sort_and_filter_reviews() {
        let mut reviews = vec![
            review(1, "zed", 30, 10),
            review(2, "Amy", 80, 5),
            review(3, "bob", 50, 20),
        ];

        ReviewSort::Date.apply(&mut reviews);
        assert_eq!(reviews.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1, 3]);

        ReviewSort::Rating.apply(&mut reviews);
        assert_eq!(reviews.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3, 1]);

        ReviewSort::Username.apply(&mut reviews);
        assert_eq!(reviews.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3, 1]);

        let positive: Vec<_> = reviews
            .iter()
            .filter(|r| ReviewFilter::Positive.matches(r))
            .collect();
        assert_eq!(positive.len(), 2);
    }

    #[test]
    fn rating_badges() {
        assert_eq!(rating_class(75), "badge-success");
        assert_eq!(rating_class(50), "badge-warning");
        assert_eq!(rating_class(49), "badge-error");
    }
}
