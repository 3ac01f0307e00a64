use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a game with reviews.
///
/// Verifies that the game's reviews go with it while other games keep theirs.
///
/// Expected: Ok(true) and only the other game's review left
#[tokio::test]
async fn deletes_game_and_its_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_game_with_appid(db, 10).await?;
    factory::create_game_with_appid(db, 20).await?;
    factory::create_review(db, 10).await?;
    factory::create_review(db, 10).await?;
    factory::create_review(db, 20).await?;

    let deleted = GameRepository::new(db).delete(10).await?;

    assert!(deleted);
    assert!(entity::prelude::Game::find_by_id(10).one(db).await?.is_none());
    assert_eq!(entity::prelude::Review::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a missing game.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!GameRepository::new(db).delete(10).await?);

    Ok(())
}
