use daybook::DaybookError;
use daybook::db::{EntityKind, GoalPatch};
use daybook_schema::GoalCreate;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;

fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "daybook-{tag}-{}-{nanos}.sqlite",
        std::process::id()
    ))
}

async fn remove_db_files(db_path: &PathBuf) {
    let _ = fs::remove_file(format!("{}-wal", db_path.display())).await;
    let _ = fs::remove_file(format!("{}-shm", db_path.display())).await;
    let _ = fs::remove_file(db_path).await;
}

fn goal(text: &str) -> GoalCreate {
    GoalCreate {
        text: text.to_string(),
        done: false,
    }
}

#[tokio::test]
async fn test_goal_update_keeps_id_and_created_at() {
    let db_path = temp_db_path("goal-update");
    let db = daybook::db::spawn(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to spawn DbActor");

    let before = chrono::Utc::now();
    let created = db.create_goal(goal("run 5k")).await.unwrap();
    assert!(!created.done);
    assert!(created.created_at >= before);

    let updated = db
        .patch_goal(
            created.id,
            GoalPatch {
                text: "run 10k".to_string(),
                done: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.text, "run 10k");
    assert!(updated.done);

    let listed = db.list_goals().await.unwrap();
    assert_eq!(listed, vec![updated]);

    remove_db_files(&db_path).await;
}

#[tokio::test]
async fn test_goal_list_is_newest_first() {
    let db_path = temp_db_path("goal-order");
    let db = daybook::db::spawn(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to spawn DbActor");

    let a = db.create_goal(goal("a")).await.unwrap();
    let b = db
        .create_goal(GoalCreate {
            text: "b".to_string(),
            done: true,
        })
        .await
        .unwrap();
    let c = db.create_goal(goal("c")).await.unwrap();

    let ids: Vec<i64> = db.list_goals().await.unwrap().iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);

    remove_db_files(&db_path).await;
}

#[tokio::test]
async fn test_goal_missing_id_is_not_found() {
    let db_path = temp_db_path("goal-missing");
    let db = daybook::db::spawn(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("failed to spawn DbActor");

    let err = db.delete(EntityKind::Goal, 42).await.unwrap_err();
    assert!(matches!(
        err,
        DaybookError::NotFound {
            entity: "Goal",
            id: 42
        }
    ));

    let err = db
        .patch_goal(
            42,
            GoalPatch {
                text: "x".to_string(),
                done: false,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DaybookError::NotFound { id: 42, .. }));

    let kept = db.create_goal(goal("kept")).await.unwrap();
    let gone = db.create_goal(goal("gone")).await.unwrap();
    db.delete(EntityKind::Goal, gone.id).await.unwrap();
    assert_eq!(db.list_goals().await.unwrap(), vec![kept]);

    remove_db_files(&db_path).await;
}
