use super::*;

/// Tests editing a review.
///
/// Expected: Ok(Some) with the new rating, old comment and the editor recorded
#[tokio::test]
async fn updates_and_stamps_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_game_with_appid(db, 10).await?;
    let review = factory::review::ReviewFactory::new(db, 10)
        .comment("Fine")
        .rating(60)
        .build()
        .await?;

    let updated = ReviewRepository::new(db)
        .update(
            review.id,
            UpdateReviewParams {
                comment: None,
                rating: Some(20),
                updated_by: 7,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.rating, 20);
    assert_eq!(updated.comment, "Fine");
    assert_eq!(updated.updated_by, Some(7));
    assert!(updated.updated_at.is_some());

    Ok(())
}

/// Tests deleting a review.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_review_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_game_with_appid(db, 10).await?;
    let review = factory::create_review(db, 10).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.delete(review.id).await?);
    assert!(!repo.delete(review.id).await?);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
