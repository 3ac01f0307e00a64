use super::*;

/// Tests a partial update.
///
/// Verifies that only given fields change and the modification is stamped.
///
/// Expected: Ok(Some) with new price, untouched name and last_modified_by set
#[tokio::test]
async fn updates_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db)
        .appid(10)
        .name("Counter-Strike")
        .build()
        .await?;

    let params = UpdateGameParams {
        price: Some(4.99),
        tags: Some(vec!["FPS".to_string()]),
        modified_by: "admin".to_string(),
        ..Default::default()
    };
    let game = GameRepository::new(db).update(10, params).await?;

    assert!(game.is_some());
    let game = game.unwrap();
    assert_eq!(game.name, "Counter-Strike");
    assert_eq!(game.price, 4.99);
    assert_eq!(game.tags, vec!["FPS"]);
    assert_eq!(game.last_modified_by.as_deref(), Some("admin"));
    assert!(game.last_modified_at.is_some());

    Ok(())
}

/// Tests updating a missing game.
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

    let params = UpdateGameParams {
        price: Some(1.0),
        modified_by: "admin".to_string(),
        ..Default::default()
    };
    let result = GameRepository::new(db).update(99, params).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests overwriting the developers list and the price directly.
///
/// Expected: Ok with the new values stored
#[tokio::test]
async fn sets_developers_and_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_game_with_appid(db, 10).await?;

    let repo = GameRepository::new(db);
    repo.set_developers(10, &["Valve Software".to_string()]).await?;
    repo.set_price(10, 3.5).await?;

    let game = repo.find_by_appid(10).await?.unwrap();
    assert_eq!(game.developers, vec!["Valve Software"]);
    assert_eq!(game.price, 3.5);

    Ok(())
}
