use super::*;

/// Tests reading the status before any run has happened.
///
/// Verifies that the first read creates an idle default row.
///
/// Expected: Ok with an idle status
#[tokio::test]
async fn initializes_idle_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SyncStatusRepository::new(db);
    let status = repo.current().await?;

    assert_eq!(status.id, SYNC_STATUS_ID);
    assert!(!status.is_running);
    assert_eq!(status.total, 0);
    assert!(status.started_at.is_none());

    Ok(())
}

/// Tests reclaiming a run whose heartbeat went stale.
///
/// Verifies that a running row with a heartbeat older than the staleness
/// threshold is flipped to not-running with an explanatory last error, so a
/// crashed process cannot hold the lock forever.
///
/// Expected: Ok with is_running false and a reclaim note
#[tokio::test]
async fn reclaims_stale_run() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_status(db, true, Utc::now() - Duration::minutes(15)).await?;

    let repo = SyncStatusRepository::new(db);
    let status = repo.current().await?;

    assert!(!status.is_running);
    assert!(status.last_error.is_some());

    Ok(())
}

/// Tests that a live heartbeat is not reclaimed.
///
/// Verifies that a running row whose heartbeat is recent passes through
/// untouched.
///
/// Expected: Ok with is_running still true
#[tokio::test]
async fn keeps_live_run_running() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_status(db, true, Utc::now() - Duration::minutes(2)).await?;

    let repo = SyncStatusRepository::new(db);
    let status = repo.current().await?;

    assert!(status.is_running);
    assert!(status.last_error.is_none());

    Ok(())
}

/// Tests that an idle row is never reclaimed no matter how old.
///
/// Expected: Ok with the idle row unchanged
#[tokio::test]
async fn ignores_staleness_when_idle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_status(db, false, Utc::now() - Duration::days(3)).await?;

    let repo = SyncStatusRepository::new(db);
    let status = repo.current().await?;

    assert!(!status.is_running);
    assert!(status.last_error.is_none());

    Ok(())
}
