use super::*;
use crate::server::{data::game::GameRepository, service::catalog::CatalogService};
use serde_json::json;

/// Tests importing a dataset dump.
///
/// Expected: loose list shapes are normalized, bad keys and nameless records skipped
#[tokio::test]
async fn imports_loose_records() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dataset = json!({
        "620": {
            "name": "Portal 2",
            "release_date": "Apr 18, 2011",
            "price": "7.19",
            "developers": "['Valve', 'Hidden Path']",
            "tags": {"Puzzle": 120, "Co-op": 80},
            "supported_languages": ["English, French<br><strong>*</strong>languages with full audio support"],
            "positive": 900,
            "negative": 100,
            "pct_pos_total": 98
        },
        "not-an-appid": {"name": "Ignored"},
        "10": {"name": ""}
    });

    let imported = CatalogService::new(db).import(&dataset).await?;

    assert_eq!(imported, 1);
    let game = GameRepository::new(db).find_by_appid(620).await?.unwrap();
    assert_eq!(game.price, 7.19);
    assert_eq!(game.developers, vec!["Valve", "Hidden Path"]);
    assert!(game.tags.contains(&"Puzzle".to_string()));
    assert_eq!(game.supported_languages, vec!["English", "French"]);
    assert_eq!(game.pct_pos_total, Some(98));

    Ok(())
}

/// Tests that seeding leaves a populated catalog alone.
///
/// Expected: Ok(None) without reading the file
#[tokio::test]
async fn seed_skips_populated_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_game(db).await?;

    let result = CatalogService::new(db)
        .seed_if_empty(std::path::Path::new("/nonexistent/games.json"))
        .await?;

    assert_eq!(result, None);

    Ok(())
}
