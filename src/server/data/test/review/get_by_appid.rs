use super::*;

/// Tests listing a game's reviews.
///
/// Expected: Ok with only that game's reviews, newest first
#[tokio::test]
async fn lists_reviews_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (game, created) = factory::helpers::create_game_with_reviews(db, &[10, 50, 90]).await?;
    let other = factory::create_game(db).await?;
    factory::create_review(db, other.appid).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.get_by_appid(game.appid).await?;

    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0].id, created[2].id);
    assert_eq!(reviews[2].id, created[0].id);

    let mut ratings = repo.get_ratings(game.appid).await?;
    ratings.sort();
    assert_eq!(ratings, vec![10, 50, 90]);

    let both = repo.get_by_appids(&[game.appid, other.appid]).await?;
    assert_eq!(both.len(), 4);
    assert!(repo.get_by_appids(&[]).await?.is_empty());

    Ok(())
}
