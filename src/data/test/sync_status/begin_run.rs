use super::*;

/// Tests claiming the singleton for a fresh run.
///
/// Verifies that the first claim creates the row, marks it running, and
/// seeds the counters.
///
/// Expected: Ok with a running status at zero progress
#[tokio::test]
async fn claims_fresh_singleton() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SyncStatusRepository::new(db);
    let status = repo.begin_run(42).await?;

    assert!(status.is_running);
    assert_eq!(status.current, 0);
    assert_eq!(status.total, 42);
    assert_eq!(status.failed, 0);
    assert!(status.started_at.is_some());
    assert!(status.completed_at.is_none());
    assert!(status.last_error.is_none());

    Ok(())
}

/// Tests that a new run clears the residue of the previous one.
///
/// Verifies that counters, completion timestamp, and last error from a
/// finished run are all reset by the next claim.
///
/// Expected: Ok with a clean running status
#[tokio::test]
async fn resets_previous_run_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SyncStatusRepository::new(db);
    repo.begin_run(5).await?;
    repo.record_progress(5, 2, Some("invite expired".to_string()))
        .await?;
    repo.finish(None).await?;

    let status = repo.begin_run(10).await?;

    assert!(status.is_running);
    assert_eq!(status.current, 0);
    assert_eq!(status.total, 10);
    assert_eq!(status.failed, 0);
    assert!(status.completed_at.is_none());
    assert!(status.last_error.is_none());

    Ok(())
}
