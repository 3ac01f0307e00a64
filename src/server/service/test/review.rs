use super::*;
use crate::{
    model::{
        api::MAX_PAGE_SIZE,
        review::{CreateReviewDto, UpdateReviewDto},
    },
    server::{
        error::auth::AuthError,
        service::review::{ReviewActor, ReviewService},
    },
};

fn actor(user_id: i32, is_admin: bool) -> ReviewActor {
    ReviewActor { user_id, is_admin }
}

/// Tests posting a review on a missing game.
///
/// Expected: Err(NotFound) and nothing stored
#[tokio::test]
async fn create_requires_existing_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dto = CreateReviewDto {
        comment: "Great".to_string(),
        rating: 90,
        username: None,
    };
    let result = ReviewService::new(db).create(404, dto, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the owner rule when editing.
///
/// Expected: a stranger gets NotReviewOwner("edit"), an admin may edit
#[tokio::test]
async fn only_owner_or_admin_edits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let game = factory::create_game(db).await?;
    let review = factory::review::ReviewFactory::new(db, game.appid)
        .created_by(Some(1))
        .build()
        .await?;

    let service = ReviewService::new(db);
    let dto = UpdateReviewDto {
        comment: None,
        rating: Some(10),
    };

    let result = service
        .update(game.appid, review.id, dto.clone(), actor(2, false))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotReviewOwner("edit")))
    ));

    let updated = service
        .update(game.appid, review.id, dto, actor(2, true))
        .await?;
    assert_eq!(updated.rating, 10);
    assert_eq!(updated.updated_by, Some(2));

    Ok(())
}

/// Tests deleting a review through the wrong game.
///
/// Expected: Err(NotFound) and the review is kept
#[tokio::test]
async fn delete_checks_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    let review = factory::review::ReviewFactory::new(db, game.appid)
        .created_by(Some(1))
        .build()
        .await?;

    let service = ReviewService::new(db);

    let result = service.delete(other.appid, review.id, actor(1, false)).await;
    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Review not found"));

    let deleted = service.delete(game.appid, review.id, actor(1, false)).await?;
    assert_eq!(deleted.id, review.id);

    Ok(())
}

/// Tests review statistics.
///
/// Expected: percentages from storefront counts, average and distribution from rows
#[tokio::test]
async fn stats_combine_counts_and_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let game = factory::game::GameFactory::new(db)
        .reviews(3, 1)
        .build()
        .await?;
    for rating in [10, 55, 90] {
        factory::review::ReviewFactory::new(db, game.appid)
            .rating(rating)
            .build()
            .await?;
    }

    let stats = ReviewService::new(db).stats(game.appid).await?;

    assert_eq!(stats.total_reviews, 4);
    assert_eq!(stats.positive_pct, 75.0);
    assert_eq!(stats.negative_pct, 25.0);
    assert_eq!(stats.average_rating, Some(51.67));
    assert_eq!(stats.rating_distribution.very_low, 1);
    assert_eq!(stats.rating_distribution.mixed, 1);
    assert_eq!(stats.rating_distribution.very_high, 1);

    Ok(())
}

/// Tests the recent feed limit.
///
/// Expected: a zero limit still returns one review, counters cover everything
#[tokio::test]
async fn recent_clamps_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (game, _) = factory::helpers::create_game_with_reviews(db, &[80, 40, 60]).await?;

    let recent = ReviewService::new(db).recent(0).await?;

    assert_eq!(recent.reviews.len(), 1);
    assert_eq!(recent.reviews[0].review.rating, 60);
    assert_eq!(recent.reviews[0].game_name, game.name);
    assert_eq!(recent.total_count, 3);
    assert_eq!(recent.recent_hour_count, 3);

    Ok(())
}

/// Tests the admin listing without reviews.
///
/// Expected: empty page reporting a single page
#[tokio::test]
async fn admin_list_reports_one_page_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = ReviewService::new(db).admin_list(None, 1, 20).await?;

    assert!(listing.reviews.is_empty());
    assert_eq!(listing.pagination.total_results, 0);
    assert_eq!(listing.pagination.total_pages, 1);
    assert_eq!(listing.pagination.per_page, 20);

    Ok(())
}

/// Tests the admin listing with an absurd page request.
///
/// Expected: page size capped and an empty page instead of an overflow
#[tokio::test]
async fn admin_list_caps_oversized_page_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::create_game_with_reviews(db, &[80, 40]).await?;

    let listing = ReviewService::new(db)
        .admin_list(None, 3, 9_223_372_036_854_775_808)
        .await?;

    assert!(listing.reviews.is_empty());
    assert_eq!(listing.pagination.per_page, MAX_PAGE_SIZE);
    assert_eq!(listing.pagination.total_results, 2);
    assert_eq!(listing.pagination.total_pages, 1);

    Ok(())
}
