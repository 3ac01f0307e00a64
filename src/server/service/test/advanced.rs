use super::*;
use crate::{
    model::advanced::TopMetric,
    server::service::advanced::AdvancedService,
};

/// Tests the value ranking price floor.
///
/// Expected: prices below 0.5 score as 0.5, the ratio is reported as a percent
#[tokio::test]
async fn value_uses_price_floor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cheap = factory::game::GameFactory::new(db)
        .price(0.1)
        .reviews(10, 0)
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .price(2.0)
        .reviews(10, 10)
        .build()
        .await?;

    let ranked = AdvancedService::new(db).value(10).await?;

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].appid, cheap.appid);
    assert_eq!(ranked[0].value_score, 200.0);
    assert_eq!(ranked[0].positive_ratio, 100.0);
    assert_eq!(ranked[1].value_score, 25.0);

    Ok(())
}

/// Tests metric parsing.
///
/// Expected: missing metric defaults to positive, unknown metric is rejected
#[test]
fn parses_metric() {
    assert_eq!(AdvancedService::parse_metric(None).unwrap(), TopMetric::Positive);
    assert_eq!(
        AdvancedService::parse_metric(Some("peak_ccu")).unwrap(),
        TopMetric::PeakCcu
    );
    assert!(matches!(
        AdvancedService::parse_metric(Some("owners")),
        Err(AppError::BadRequest(msg)) if msg == "Invalid metric"
    ));
}

/// Tests the top ranking.
///
/// Expected: games ordered by the metric, limited
#[tokio::test]
async fn top_orders_by_metric() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::game::GameFactory::new(db).peak_ccu(10).build().await?;
    let busiest = factory::game::GameFactory::new(db).peak_ccu(900).build().await?;
    factory::game::GameFactory::new(db).peak_ccu(50).build().await?;

    let top = AdvancedService::new(db).top(TopMetric::PeakCcu, 2).await?;

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].appid, busiest.appid);
    assert_eq!(top[1].peak_ccu, 50);

    Ok(())
}
