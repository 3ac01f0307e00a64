use super::*;

/// Tests catalog aggregates.
///
/// Expected: Ok with count 3, mean price 5.0 and the highest peak game
#[tokio::test]
async fn computes_catalog_aggregates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for (appid, price, peak) in [(1, 0.0, 0), (2, 5.0, 300), (3, 10.0, 1200)] {
        factory::game::GameFactory::new(db)
            .appid(appid)
            .price(price)
            .peak_ccu(peak)
            .build()
            .await?;
    }

    let repo = GameRepository::new(db);

    assert_eq!(repo.count().await?, 3);
    assert_eq!(repo.average_price().await?, Some(5.0));
    assert_eq!(repo.top_peak().await?.map(|g| g.appid), Some(3));

    Ok(())
}

/// Tests aggregates over an empty catalog.
///
/// Expected: Ok with zero count, no mean price and no top peak game
#[tokio::test]
async fn handles_empty_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert_eq!(repo.count().await?, 0);
    assert_eq!(repo.average_price().await?, None);
    assert!(repo.top_peak().await?.is_none());

    Ok(())
}
