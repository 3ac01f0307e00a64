use super::*;
use serde_json::json;

/// Tests writing an audit entry.
///
/// Verifies the action and status are stored as their uppercase and lowercase names
/// and details survive as JSON.
///
/// Expected: Ok with action "RENAME_DEVELOPER" and status "failed"
#[tokio::test]
async fn records_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActionLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let log = ActionLogRepository::new(db)
        .create(NewActionLog {
            user_id: Some(1),
            username: "root".to_string(),
            role: "admin".to_string(),
            action: LogAction::RenameDeveloper,
            collection: "games".to_string(),
            target_id: "Valve".to_string(),
            ip: Some("203.0.113.7".to_string()),
            details: json!({"old_name": "Valve", "new_name": "Valve Software"}),
            endpoint: "POST /api/v1.0/games/developers/rename".to_string(),
            status: LogStatus::Failed,
        })
        .await?;

    assert_eq!(log.action, "RENAME_DEVELOPER");
    assert_eq!(log.status, "failed");
    assert_eq!(log.details["new_name"], "Valve Software");
    assert_eq!(log.ip.as_deref(), Some("203.0.113.7"));

    Ok(())
}
