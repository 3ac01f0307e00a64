use super::*;
use chrono::{Duration, Utc};

/// Tests the newest-first listing used by the misc endpoints.
///
/// Expected: Ok with the most recently created game first
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    for (appid, age) in [(1, 3), (2, 1), (3, 2)] {
        factory::game::GameFactory::new(db)
            .appid(appid)
            .created_at(now - Duration::hours(age))
            .build()
            .await?;
    }

    let (games, total) = GameRepository::new(db)
        .get_newest_paginated(&PageParams::default())
        .await?;

    assert_eq!(total, 3);
    assert_eq!(games.iter().map(|g| g.appid).collect::<Vec<_>>(), vec![2, 3, 1]);

    Ok(())
}

/// Tests replacing misc fields on an existing game.
///
/// Verifies that fields left as None are untouched.
///
/// Expected: Ok(Some) with new tags and the old genres
#[tokio::test]
async fn updates_only_given_misc_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db)
        .appid(10)
        .genres(&["Action"])
        .tags(&["FPS"])
        .peak_ccu(100)
        .build()
        .await?;

    let fields = MiscFields {
        tags: Some(vec!["Classic".to_string()]),
        ..Default::default()
    };
    let game = GameRepository::new(db)
        .update_misc(10, fields, None)
        .await?
        .unwrap();

    assert_eq!(game.tags, vec!["Classic"]);
    assert_eq!(game.genres, vec!["Action"]);
    assert_eq!(game.peak_ccu, 100);

    Ok(())
}

/// Tests clearing misc fields.
///
/// Expected: Ok(Some) with empty lists and zero peak players
#[tokio::test]
async fn clears_misc_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db)
        .appid(10)
        .genres(&["Action"])
        .languages(&["English"])
        .peak_ccu(100)
        .build()
        .await?;

    let game = GameRepository::new(db)
        .update_misc(10, MiscFields::cleared(), Some("admin".to_string()))
        .await?
        .unwrap();

    assert!(game.genres.is_empty());
    assert!(game.supported_languages.is_empty());
    assert_eq!(game.peak_ccu, 0);
    assert_eq!(game.developers, vec!["Valve"]);

    Ok(())
}

/// Tests creating a game from misc fields alone.
///
/// Expected: Ok with the given name and fields, free, no developers
#[tokio::test]
async fn creates_game_from_misc_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fields = MiscFields {
        genres: Some(vec!["Indie".to_string()]),
        peak_ccu: Some(42),
        ..Default::default()
    };
    let game = GameRepository::new(db)
        .create_misc(77, "Tiny Game".to_string(), fields, "admin".to_string())
        .await?;

    assert_eq!(game.name, "Tiny Game");
    assert_eq!(game.genres, vec!["Indie"]);
    assert_eq!(game.peak_ccu, 42);
    assert_eq!(game.price, 0.0);
    assert!(game.developers.is_empty());

    Ok(())
}
