use super::*;
use crate::model::advanced::TopMetric;

/// Tests ranking by each metric.
///
/// Expected: Ok with the game leading each metric first, truncated to the limit
#[tokio::test]
async fn ranks_by_metric() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for (appid, positive, metacritic, peak) in [(1, 10, 90, 5), (2, 500, 70, 50), (3, 50, 80, 5000)]
    {
        factory::game::GameFactory::new(db)
            .appid(appid)
            .reviews(positive, 0)
            .metacritic_score(metacritic)
            .peak_ccu(peak)
            .build()
            .await?;
    }

    let repo = GameRepository::new(db);
    let appids = |games: Vec<crate::server::model::game::Game>| {
        games.into_iter().map(|g| g.appid).collect::<Vec<_>>()
    };

    assert_eq!(appids(repo.top_by(TopMetric::Positive, 2).await?), vec![2, 3]);
    assert_eq!(appids(repo.top_by(TopMetric::MetacriticScore, 1).await?), vec![1]);
    assert_eq!(appids(repo.top_by(TopMetric::PeakCcu, 3).await?), vec![3, 2, 1]);

    Ok(())
}

/// Tests the paid game pool.
///
/// Expected: Ok without the free game, capped at the limit
#[tokio::test]
async fn gets_paid_games_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for (appid, price) in [(1, 0.0), (2, 4.99), (3, 9.99), (4, 1.0)] {
        factory::game::GameFactory::new(db)
            .appid(appid)
            .price(price)
            .build()
            .await?;
    }

    let games = GameRepository::new(db).get_paid(2).await?;

    assert_eq!(games.iter().map(|g| g.appid).collect::<Vec<_>>(), vec![2, 3]);

    Ok(())
}
