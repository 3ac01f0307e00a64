use super::*;
use sea_orm::EntityTrait;

/// Tests creating a game.
///
/// Verifies that list fields round trip through the stored JSON encoding and that
/// the creator is recorded.
///
/// Expected: Ok with lists and created_by set
#[tokio::test]
async fn creates_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let game = repo.create(create_params(400, "Portal")).await?;

    assert_eq!(game.appid, 400);
    assert_eq!(game.genres, vec!["Puzzle"]);
    assert_eq!(game.created_by.as_deref(), Some("admin"));
    assert!(game.last_modified_at.is_none());

    let stored = entity::prelude::Game::find_by_id(400).one(db).await?.unwrap();
    assert_eq!(stored.genres, r#"["Puzzle"]"#);

    Ok(())
}

/// Tests creating a game with an appid that already exists.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_appid() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    repo.create(create_params(400, "Portal")).await?;
    let result = repo.create(create_params(400, "Portal again")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
