use super::*;

/// Tests finding an existing game.
///
/// Verifies that list columns come back decoded.
///
/// Expected: Ok(Some) with developers decoded from JSON
#[tokio::test]
async fn finds_existing_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db)
        .appid(620)
        .name("Portal 2")
        .developers(&["Valve", "Hidden Path"])
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let game = repo.find_by_appid(620).await?;

    assert!(game.is_some());
    let game = game.unwrap();
    assert_eq!(game.name, "Portal 2");
    assert_eq!(game.developers, vec!["Valve", "Hidden Path"]);
    assert!(repo.exists(620).await?);

    Ok(())
}

/// Tests looking up an appid with no row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert!(repo.find_by_appid(1).await?.is_none());
    assert!(!repo.exists(1).await?);

    Ok(())
}

/// Tests reading a row whose developers column is not a JSON array.
///
/// Expected: Err(InternalErr) instead of a silently empty list
#[tokio::test]
async fn fails_on_malformed_list_column() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db)
        .appid(30)
        .raw_developers("Valve, Hidden Path")
        .build()
        .await?;

    let result = GameRepository::new(db).find_by_appid(30).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
