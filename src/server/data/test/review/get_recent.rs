use super::*;
use chrono::{Duration, Utc};

/// Tests the recent review feed.
///
/// Verifies reviews carry their game's name and are ordered newest first.
///
/// Expected: Ok with the two newest reviews and their game names
#[tokio::test]
async fn gets_recent_reviews_with_game_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db)
        .appid(10)
        .name("Counter-Strike")
        .build()
        .await?;
    let now = Utc::now();
    for (comment, age) in [("old", 90), ("newest", 1), ("middle", 30)] {
        factory::review::ReviewFactory::new(db, 10)
            .comment(comment)
            .created_at(now - Duration::minutes(age))
            .build()
            .await?;
    }

    let repo = ReviewRepository::new(db);
    let recent = repo.get_recent(2).await?;

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].review.comment, "newest");
    assert_eq!(recent[1].review.comment, "middle");
    assert_eq!(recent[0].game_name, "Counter-Strike");
    assert_eq!(recent[0].game_appid, 10);

    assert_eq!(repo.count_since(now - Duration::hours(1)).await?, 2);

    Ok(())
}
