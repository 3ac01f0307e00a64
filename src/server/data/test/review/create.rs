use super::*;

/// Tests creating a review for an existing game.
///
/// Expected: Ok with the review stored and no edit stamp
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_game_with_appid(db, 10).await?;

    let review = ReviewRepository::new(db)
        .create(CreateReviewParams {
            appid: 10,
            username: "alice".to_string(),
            comment: "Classic".to_string(),
            rating: 90,
            created_by: Some(4),
        })
        .await?;

    assert_eq!(review.appid, 10);
    assert_eq!(review.username, "alice");
    assert_eq!(review.created_by, Some(4));
    assert!(review.updated_at.is_none());

    Ok(())
}

/// Tests finding a review through the wrong game.
///
/// Expected: Ok(None) even though the review id exists
#[tokio::test]
async fn find_checks_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_game_with_appid(db, 10).await?;
    factory::create_game_with_appid(db, 20).await?;
    let review = factory::create_review(db, 10).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.find(10, review.id).await?.is_some());
    assert!(repo.find(20, review.id).await?.is_none());

    Ok(())
}
