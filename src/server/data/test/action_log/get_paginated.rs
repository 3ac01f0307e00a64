use super::*;
use chrono::{Duration, Utc};

/// Tests listing audit entries.
///
/// Expected: Ok with the newest entry first and the total across pages
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActionLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    for (target, age) in [("1", 30), ("2", 5), ("3", 60)] {
        factory::action_log::ActionLogFactory::new(db)
            .target_id(target)
            .timestamp(now - Duration::minutes(age))
            .build()
            .await?;
    }

    let (logs, total) = ActionLogRepository::new(db)
        .get_paginated(&PageParams::new(1, 2))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(
        logs.iter().map(|l| l.target_id.as_str()).collect::<Vec<_>>(),
        vec!["2", "1"]
    );

    Ok(())
}

/// Tests reading a row whose details are not JSON.
///
/// Expected: Ok with the raw text kept as a JSON string
#[tokio::test]
async fn keeps_non_json_details_as_string() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_table(entity::prelude::ActionLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_action_log(db).await?;
    let mut active: entity::action_log::ActiveModel = created.into();
    active.details = ActiveValue::Set("legacy text".to_string());
    active.update(db).await?;

    let (logs, _) = ActionLogRepository::new(db)
        .get_paginated(&PageParams::default())
        .await?;

    assert_eq!(logs[0].details, serde_json::Value::String("legacy text".to_string()));

    Ok(())
}
