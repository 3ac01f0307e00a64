use super::*;

/// Tests searching reviews by reviewer, comment and game name.
///
/// Expected: Ok with each search term finding its review
#[tokio::test]
async fn searches_reviewer_comment_and_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db)
        .appid(620)
        .name("Portal 2")
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .appid(70)
        .name("Half-Life")
        .build()
        .await?;
    factory::review::ReviewFactory::new(db, 620)
        .username("alice")
        .comment("Great puzzles")
        .build()
        .await?;
    factory::review::ReviewFactory::new(db, 70)
        .username("bob")
        .comment("Crowbar time")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let params = PageParams::new(1, 20);

    let (found, total) = repo.search_paginated(Some("ALICE"), &params).await?;
    assert_eq!(total, 1);
    assert_eq!(found[0].review.username, "alice");

    let (found, _) = repo.search_paginated(Some("crowbar"), &params).await?;
    assert_eq!(found[0].game_appid, 70);

    let (found, _) = repo.search_paginated(Some("portal"), &params).await?;
    assert_eq!(found[0].game_name, "Portal 2");

    let (_, total) = repo.search_paginated(None, &params).await?;
    assert_eq!(total, 2);

    Ok(())
}

/// Tests paging through reviews.
///
/// Expected: Ok with 2 reviews on page 1 and 1 on page 2 out of 3
#[tokio::test]
async fn pages_through_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::create_game_with_reviews(db, &[10, 20, 30]).await?;

    let repo = ReviewRepository::new(db);
    let (first, total) = repo.search_paginated(None, &PageParams::new(1, 2)).await?;
    let (second, _) = repo.search_paginated(Some("  "), &PageParams::new(2, 2)).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0].review.rating, 30);

    Ok(())
}
