use super::*;
use crate::server::{data::game::GameRepository, service::developer::DeveloperService};

/// Tests renaming a developer.
///
/// Expected: exact matches are renamed and deduplicated, similar names are untouched
#[tokio::test]
async fn renames_exact_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let merged = factory::game::GameFactory::new(db)
        .developers(&["Valve", "Hidden Path"])
        .build()
        .await?;
    let similar = factory::game::GameFactory::new(db)
        .developers(&["Valve Corporation"])
        .build()
        .await?;

    let changed = DeveloperService::new(db)
        .rename("Valve", "Hidden Path")
        .await?;

    assert_eq!(changed, 1);
    let repo = GameRepository::new(db);
    let merged = repo.find_by_appid(merged.appid).await?.unwrap();
    assert_eq!(merged.developers, vec!["Hidden Path"]);
    let similar = repo.find_by_appid(similar.appid).await?.unwrap();
    assert_eq!(similar.developers, vec!["Valve Corporation"]);

    Ok(())
}

/// Tests deleting a developer.
///
/// Expected: blank names are rejected, the name is removed from every game
#[tokio::test]
async fn deletes_developer_everywhere() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_game(db).await?;
    factory::create_game(db).await?;

    let service = DeveloperService::new(db);

    assert!(matches!(
        service.delete("  ").await,
        Err(AppError::BadRequest(msg)) if msg == "Developer name is required."
    ));
    assert_eq!(service.delete("Valve").await?, 2);
    assert!(service.list().await?.is_empty());

    Ok(())
}

/// Tests the developer listing.
///
/// Expected: names sorted, malformed fragments skipped, games grouped per name
#[tokio::test]
async fn lists_developers_sorted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db)
        .developers(&["Valve", "['Broken']"])
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .developers(&["Arkane", "Valve"])
        .build()
        .await?;

    let developers = DeveloperService::new(db).list().await?;

    let names: Vec<&str> = developers.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Arkane", "Valve"]);
    assert_eq!(developers[1].games.len(), 2);

    Ok(())
}

/// Tests renaming and deleting developers whose names need JSON escaping.
///
/// Expected: quotes and backslashes match their stored form
#[tokio::test]
async fn rewrites_names_with_quotes_and_backslashes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let quoted = factory::game::GameFactory::new(db)
        .developers(&["\"Weird\" Studio", "Valve"])
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .developers(&["Back\\Slash Games"])
        .build()
        .await?;

    let service = DeveloperService::new(db);

    assert_eq!(service.rename("\"Weird\" Studio", "Weird Studio").await?, 1);
    let renamed = GameRepository::new(db)
        .find_by_appid(quoted.appid)
        .await?
        .unwrap();
    assert_eq!(renamed.developers, vec!["Weird Studio", "Valve"]);

    assert_eq!(service.delete("Back\\Slash Games").await?, 1);

    Ok(())
}
