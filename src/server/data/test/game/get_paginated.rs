use super::*;

/// Tests the default listing order.
///
/// Verifies that games come back by ascending appid and that the total counts every
/// game, not just the page.
///
/// Expected: Ok with appids [10, 20] on page 1 and total 3
#[tokio::test]
async fn orders_by_appid_ascending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for appid in [30, 10, 20] {
        factory::create_game_with_appid(db, appid).await?;
    }

    let repo = GameRepository::new(db);
    let (games, total) = repo
        .get_paginated(ListOrder::AppidAsc, &PageParams::new(1, 2))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(games.iter().map(|g| g.appid).collect::<Vec<_>>(), vec![10, 20]);

    let (games, _) = repo
        .get_paginated(ListOrder::AppidAsc, &PageParams::new(2, 2))
        .await?;
    assert_eq!(games.iter().map(|g| g.appid).collect::<Vec<_>>(), vec![30]);

    Ok(())
}

/// Tests the top rated listing order.
///
/// Expected: Ok with the game with the most positive reviews first
#[tokio::test]
async fn orders_by_positive_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for (appid, positive) in [(10, 5), (20, 500), (30, 50)] {
        factory::game::GameFactory::new(db)
            .appid(appid)
            .reviews(positive, 0)
            .build()
            .await?;
    }

    let (games, _) = GameRepository::new(db)
        .get_paginated(ListOrder::PositiveDesc, &PageParams::default())
        .await?;

    assert_eq!(games.iter().map(|g| g.appid).collect::<Vec<_>>(), vec![20, 30, 10]);

    Ok(())
}

/// Tests listing only games that have reviews.
///
/// Expected: Ok with the reviewed game only
#[tokio::test]
async fn lists_only_reviewed_games() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_game_with_appid(db, 10).await?;
    factory::create_game_with_appid(db, 20).await?;
    factory::create_review(db, 20).await?;
    factory::create_review(db, 20).await?;

    let (games, total) = GameRepository::new(db)
        .get_reviewed_paginated(&PageParams::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(games[0].appid, 20);

    Ok(())
}
