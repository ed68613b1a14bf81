use super::*;

/// Tests finishing a run cleanly.
///
/// Verifies that the running flag clears, completion is stamped, and
/// progress counters survive for the final report.
///
/// Expected: Ok with a completed idle status
#[tokio::test]
async fn finishes_cleanly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SyncStatusRepository::new(db);
    repo.begin_run(4).await?;
    repo.record_progress(4, 0, None).await?;
    repo.finish(None).await?;

    let status = repo.get_or_init().await?;
    assert!(!status.is_running);
    assert!(status.completed_at.is_some());
    assert_eq!(status.current, 4);
    assert!(status.last_error.is_none());

    Ok(())
}

/// Tests finishing with a loop-level error.
///
/// Expected: Ok with the supplied error stored
#[tokio::test]
async fn records_loop_level_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SyncStatusRepository::new(db);
    repo.begin_run(4).await?;
    repo.finish(Some("database write failed".to_string()))
        .await?;

    let status = repo.get_or_init().await?;
    assert!(!status.is_running);
    assert_eq!(
        status.last_error.as_deref(),
        Some("database write failed")
    );

    Ok(())
}

/// Tests that finishing after a cancellation preserves the marker.
///
/// Verifies that the cleanup write does not overwrite the cancellation
/// marker the canceller stored.
///
/// Expected: Ok with the marker still present
#[tokio::test]
async fn preserves_cancellation_marker() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SyncStatusRepository::new(db);
    repo.begin_run(4).await?;
    repo.cancel().await?;
    repo.finish(None).await?;

    let status = repo.get_or_init().await?;
    assert!(!status.is_running);
    assert!(status.completed_at.is_some());
    assert_eq!(status.last_error.as_deref(), Some(CANCELLED_MARKER));

    Ok(())
}
