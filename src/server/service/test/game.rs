use super::*;
use crate::{
    model::game::GameSort,
    server::{model::game::GameFilter, service::game::GameService},
};

/// Tests the value listing.
///
/// Expected: free and unreviewed games are dropped, the rest ordered by value score
#[tokio::test]
async fn lists_by_value_score() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let pricey = factory::game::GameFactory::new(db)
        .price(9.0)
        .reviews(90, 10)
        .build()
        .await?;
    let cheap = factory::game::GameFactory::new(db)
        .price(1.0)
        .reviews(50, 50)
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .price(0.0)
        .reviews(100, 0)
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .price(5.0)
        .build()
        .await?;

    let (games, total) = GameService::new(db)
        .list(GameSort::Value, &PageParams::default())
        .await?;

    assert_eq!(total, 2);
    assert_eq!(games[0].appid, cheap.appid);
    assert_eq!(games[0].value_score, Some(500.0));
    assert_eq!(games[1].appid, pricey.appid);
    assert_eq!(games[1].value_score, Some(100.0));

    Ok(())
}

/// Tests genre search.
///
/// Expected: only whole-word matches survive the SQL substring prefilter
#[tokio::test]
async fn filters_genre_by_whole_word() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let action = factory::game::GameFactory::new(db)
        .genres(&["Action", "Indie"])
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .genres(&["Reaction"])
        .build()
        .await?;

    let filter = GameFilter {
        genre: Some("action".to_string()),
        ..Default::default()
    };
    let (games, total) = GameService::new(db)
        .filter(&filter, &PageParams::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(games[0].appid, action.appid);

    Ok(())
}

/// Tests catalog statistics on an empty catalog.
///
/// Expected: zero counters and "N/A" as top game
#[tokio::test]
async fn stats_of_empty_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = GameService::new(db).stats().await?;

    assert_eq!(stats.total_games, 0);
    assert_eq!(stats.average_price, 0.0);
    assert_eq!(stats.top_peak_game, "N/A");
    assert_eq!(stats.top_peak_ccu, 0);

    Ok(())
}

/// Tests the detail view of a reviewed game.
///
/// Expected: review counts come from rows and the snippet is the newest comment
#[tokio::test]
async fn detail_summarizes_review_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (game, reviews) = factory::helpers::create_game_with_reviews(db, &[90, 20, 60]).await?;

    let detail = GameService::new(db).get_detail(game.appid).await?;

    assert_eq!(detail.reviews.num_reviews_total, 3);
    assert_eq!(detail.reviews.positive, 2);
    assert_eq!(detail.reviews.negative, 1);
    assert_eq!(
        detail.reviews.review_snippet.as_deref(),
        Some(reviews[2].comment.as_str())
    );

    assert!(matches!(
        GameService::new(db).get_detail(1).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
