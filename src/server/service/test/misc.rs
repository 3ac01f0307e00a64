use super::*;
use crate::{
    model::misc::{UpdateMiscDto, UpsertMiscDto},
    server::service::misc::MiscService,
};

fn upsert_dto(appid: i64, name: Option<&str>) -> UpsertMiscDto {
    UpsertMiscDto {
        appid,
        name: name.map(String::from),
        genres: vec![" Action ".to_string(), "Action".to_string(), "".to_string()],
        tags: vec!["FPS".to_string()],
        supported_languages: vec!["English".to_string()],
        peak_ccu: -5,
    }
}

/// Tests upserting misc data for an existing game.
///
/// Expected: Ok((entry, false)) with lists cleaned and peak players floored at 0
#[tokio::test]
async fn upsert_updates_existing_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let game = factory::game::GameFactory::new(db)
        .name("Portal")
        .genres(&["Puzzle"])
        .peak_ccu(900)
        .build()
        .await?;

    let (entry, created) = MiscService::new(db)
        .upsert(upsert_dto(game.appid, None), "admin")
        .await?;

    assert!(!created);
    assert_eq!(entry.name, "Portal");
    assert_eq!(entry.details.genres, vec!["Action"]);
    assert_eq!(entry.details.tags, vec!["FPS"]);
    assert_eq!(entry.stats.peak_ccu, 0);

    Ok(())
}

/// Tests upserting misc data for an unknown appid.
///
/// Expected: Ok((entry, true)) and the game is stored under the given name
#[tokio::test]
async fn upsert_creates_new_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (entry, created) = MiscService::new(db)
        .upsert(upsert_dto(4000, Some("  Garry's Mod ")), "admin")
        .await?;

    assert!(created);
    assert_eq!(entry.appid, 4000);
    assert_eq!(entry.name, "Garry's Mod");

    let stored = MiscService::new(db).get(4000).await?;
    assert_eq!(stored, entry);

    Ok(())
}

/// Tests upserting misc data for an unknown appid without a name.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn upsert_new_game_requires_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MiscService::new(db);

    let missing = service.upsert(upsert_dto(4000, None), "admin").await;
    let blank = service.upsert(upsert_dto(4000, Some("   ")), "admin").await;

    assert!(matches!(missing, Err(AppError::BadRequest(_))));
    assert!(matches!(blank, Err(AppError::BadRequest(_))));
    assert!(matches!(service.get(4000).await, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a partial update without any fields.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn update_requires_a_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let game = factory::game::create_game(db).await?;

    let result = MiscService::new(db)
        .update(game.appid, UpdateMiscDto::default(), "admin")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
