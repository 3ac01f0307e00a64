use super::*;

/// Tests name and price criteria.
///
/// Verifies that the name matches as a case-insensitive substring and that the price
/// range is inclusive.
///
/// Expected: Ok with only the matching game
#[tokio::test]
async fn filters_by_name_and_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db)
        .appid(400)
        .name("Portal")
        .price(7.19)
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .appid(620)
        .name("Portal 2")
        .price(15.0)
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .appid(70)
        .name("Half-Life")
        .price(7.19)
        .build()
        .await?;

    let filter = GameFilter {
        name: Some("portal".to_string()),
        price_min: Some(7.19),
        price_max: Some(10.0),
        ..Default::default()
    };
    let games = GameRepository::new(db).get_filter_candidates(&filter).await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].appid, 400);

    Ok(())
}

/// Tests list column prefiltering and sort order.
///
/// Expected: Ok with both tagged games, highest peak first
#[tokio::test]
async fn filters_list_columns_and_sorts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db)
        .appid(1)
        .tags(&["FPS", "Shooter"])
        .peak_ccu(100)
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .appid(2)
        .tags(&["FPS"])
        .peak_ccu(900)
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .appid(3)
        .tags(&["Puzzle"])
        .peak_ccu(5000)
        .build()
        .await?;

    let filter = GameFilter {
        tag: Some("fps".to_string()),
        sort_by: GameSortColumn::PeakCcu,
        descending: true,
        ..Default::default()
    };
    let games = GameRepository::new(db).get_filter_candidates(&filter).await?;

    assert_eq!(games.iter().map(|g| g.appid).collect::<Vec<_>>(), vec![2, 1]);

    Ok(())
}
