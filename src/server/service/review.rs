//! User reviews of catalog games.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageInfoDto,
        game::GameRefDto,
        review::{
            AdminReviewsDto, CreateReviewDto, FilteredReviewsDto, GameReviewsDto,
            GameWithReviewsDto, RatingDistributionDto, RecentReviewDto, RecentReviewsDto,
            ReviewFilter, ReviewSort, ReviewStatsDto, UpdateReviewDto,
        },
    },
    server::{
        data::{
            game::GameRepository,
            review::{ReviewRepository, ReviewWithGame},
        },
        error::{auth::AuthError, AppError},
        model::{
            game::round2,
            review::{CreateReviewParams, Review, UpdateReviewParams},
        },
        service::game::{review_summary, GameService},
        util::pagination::PageParams,
    },
};

/// Upper bound of the recent reviews feed.
pub const MAX_RECENT_REVIEWS: u64 = 100;

pub const DEFAULT_ADMIN_PAGE_SIZE: u64 = 20;

/// The caller editing or deleting a review.
#[derive(Debug, Clone, Copy)]
pub struct ReviewActor {
    pub user_id: i32,
    pub is_admin: bool,
}

fn not_found() -> AppError {
    AppError::NotFound("Review not found".to_string())
}

fn into_recent(entry: ReviewWithGame) -> RecentReviewDto {
    RecentReviewDto {
        review: entry.review.into_dto(),
        game_name: entry.game_name,
        game_appid: entry.game_appid,
    }
}

/// Storefront review percentages and row-based rating statistics.
pub fn compute_stats(game: &crate::server::model::game::Game, ratings: &[i32]) -> ReviewStatsDto {
    let total = game.total_reviews();
    let pct = |count: i64| {
        if total > 0 {
            round2(count as f64 / total as f64 * 100.0)
        } else {
            0.0
        }
    };

    let average_rating = (!ratings.is_empty()).then(|| {
        round2(ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64)
    });

    ReviewStatsDto {
        appid: game.appid,
        name: game.name.clone(),
        total_reviews: total,
        positive: game.positive,
        negative: game.negative,
        positive_pct: pct(game.positive),
        negative_pct: pct(game.negative),
        average_rating,
        metacritic_score: game.metacritic_score,
        rating_distribution: RatingDistributionDto::from_ratings(ratings.iter().copied()),
    }
}

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a review.
    ///
    /// # Arguments
    /// - `author` - Id and username of a signed-in author, `None` for anonymous posts
    ///
    /// # Returns
    /// - `Ok((Review, GameRefDto))` - Stored review and the game it belongs to
    /// - `Err(AppError::BadRequest)` - Missing comment or rating outside 0..=100
    /// - `Err(AppError::NotFound)` - Unknown game
    pub async fn create(
        &self,
        appid: i64,
        dto: CreateReviewDto,
        author: Option<(i32, String)>,
    ) -> Result<(Review, GameRefDto), AppError> {
        let params = CreateReviewParams::from_dto(appid, dto, author)?;
        let game = GameService::new(self.db).get(appid).await?;

        let review = ReviewRepository::new(self.db).create(params).await?;
        Ok((review, game.as_ref_dto()))
    }

    pub async fn get_for_game(&self, appid: i64) -> Result<GameReviewsDto, AppError> {
        let game = GameService::new(self.db).get(appid).await?;
        let reviews = ReviewRepository::new(self.db).get_by_appid(appid).await?;

        Ok(GameReviewsDto {
            game: game.as_ref_dto(),
            reviews: reviews.into_iter().map(Review::into_dto).collect(),
        })
    }

    /// Gets one page of games that have reviews, each with its reviews embedded.
    pub async fn get_reviewed_games(
        &self,
        params: &PageParams,
    ) -> Result<(Vec<GameWithReviewsDto>, u64), AppError> {
        let (games, total) = GameRepository::new(self.db)
            .get_reviewed_paginated(params)
            .await?;

        let appids: Vec<i64> = games.iter().map(|g| g.appid).collect();
        let mut by_game: HashMap<i64, Vec<Review>> = HashMap::new();
        for review in ReviewRepository::new(self.db)
            .get_by_appids(&appids)
            .await?
        {
            by_game.entry(review.appid).or_default().push(review);
        }

        let data = games
            .into_iter()
            .map(|game| {
                let reviews = by_game.remove(&game.appid).unwrap_or_default();
                let summary = review_summary(&game, &reviews);
                GameWithReviewsDto {
                    game: game.into_detail(summary),
                    reviews: reviews.into_iter().map(Review::into_dto).collect(),
                }
            })
            .collect();

        Ok((data, total))
    }

    pub async fn get_with_reviews(&self, appid: i64) -> Result<GameWithReviewsDto, AppError> {
        let game = GameService::new(self.db).get(appid).await?;
        let reviews = ReviewRepository::new(self.db).get_by_appid(appid).await?;

        let summary = review_summary(&game, &reviews);
        Ok(GameWithReviewsDto {
            game: game.into_detail(summary),
            reviews: reviews.into_iter().map(Review::into_dto).collect(),
        })
    }

    async fn find_owned(
        &self,
        appid: i64,
        id: i32,
        actor: ReviewActor,
        action: &'static str,
    ) -> Result<Review, AppError> {
        let review = ReviewRepository::new(self.db)
            .find(appid, id)
            .await?
            .ok_or_else(not_found)?;

        if !actor.is_admin && !review.is_owned_by(actor.user_id) {
            return Err(AuthError::NotReviewOwner(action).into());
        }

        Ok(review)
    }

    /// Edits a review. Only its author or an admin may edit.
    ///
    /// # Returns
    /// - `Ok(Review)` - The updated review
    /// - `Err(AppError::BadRequest)` - Neither comment nor rating given
    /// - `Err(AppError::NotFound)` - No such review on that game
    /// - `Err(AppError::AuthErr(NotReviewOwner))` - Caller is neither author nor admin
    pub async fn update(
        &self,
        appid: i64,
        id: i32,
        dto: UpdateReviewDto,
        actor: ReviewActor,
    ) -> Result<Review, AppError> {
        let params = UpdateReviewParams::from_dto(dto, actor.user_id)?;
        self.find_owned(appid, id, actor, "edit").await?;

        ReviewRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(not_found)
    }

    /// Deletes a review. Only its author or an admin may delete.
    pub async fn delete(&self, appid: i64, id: i32, actor: ReviewActor) -> Result<Review, AppError> {
        let review = self.find_owned(appid, id, actor, "delete").await?;

        if !ReviewRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }
        Ok(review)
    }

    pub async fn stats(&self, appid: i64) -> Result<ReviewStatsDto, AppError> {
        let game = GameService::new(self.db).get(appid).await?;
        let ratings = ReviewRepository::new(self.db).get_ratings(appid).await?;

        Ok(compute_stats(&game, &ratings))
    }

    /// Reviews of a game filtered by sentiment and sorted.
    pub async fn filtered(
        &self,
        appid: i64,
        filter: ReviewFilter,
        sort: ReviewSort,
    ) -> Result<FilteredReviewsDto, AppError> {
        let game = GameService::new(self.db).get(appid).await?;

        let mut reviews: Vec<_> = ReviewRepository::new(self.db)
            .get_by_appid(appid)
            .await?
            .into_iter()
            .map(Review::into_dto)
            .filter(|r| filter.matches(r))
            .collect();
        sort.apply(&mut reviews);

        Ok(FilteredReviewsDto {
            game: game.as_ref_dto(),
            filter,
            sort,
            count: reviews.len(),
            reviews,
        })
    }

    /// Newest reviews across the catalog with activity counters.
    ///
    /// `limit` is clamped into `1..=100`.
    pub async fn recent(&self, limit: u64) -> Result<RecentReviewsDto, AppError> {
        let review_repo = ReviewRepository::new(self.db);
        let limit = limit.clamp(1, MAX_RECENT_REVIEWS);

        let reviews = review_repo.get_recent(limit).await?;
        let total_count = review_repo.count().await?;
        let recent_hour_count = review_repo
            .count_since(Utc::now() - Duration::hours(1))
            .await?;

        Ok(RecentReviewsDto {
            reviews: reviews.into_iter().map(into_recent).collect(),
            total_count,
            recent_hour_count,
        })
    }

    /// Admin listing of every review with optional search.
    ///
    /// The search matches reviewer, comment and game name.
    pub async fn admin_list(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<AdminReviewsDto, AppError> {
        let params = PageParams::new(page, per_page);

        let (reviews, total_results) = ReviewRepository::new(self.db)
            .search_paginated(search, &params)
            .await?;

        Ok(AdminReviewsDto {
            reviews: reviews.into_iter().map(into_recent).collect(),
            pagination: PageInfoDto {
                page: params.page(),
                per_page: params.page_size(),
                total_results,
                total_pages: total_results.div_ceil(params.page_size()).max(1),
            },
        })
    }
}
