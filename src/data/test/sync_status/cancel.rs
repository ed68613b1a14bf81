use super::*;

/// Tests cancelling an active run.
///
/// Verifies that cancellation clears the running flag, writes the
/// cancellation marker, and reports that a run was stopped.
///
/// Expected: Ok(true) with the marker stored
#[tokio::test]
async fn cancels_active_run() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SyncStatusRepository::new(db);
    repo.begin_run(10).await?;

    let cancelled = repo.cancel().await?;
    assert!(cancelled);

    let status = repo.get_or_init().await?;
    assert!(!status.is_running);
    assert_eq!(status.last_error.as_deref(), Some(CANCELLED_MARKER));

    Ok(())
}

/// Tests cancelling when nothing is running.
///
/// Expected: Ok(false) with the row untouched
#[tokio::test]
async fn reports_nothing_to_cancel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SyncStatusRepository::new(db);
    let cancelled = repo.cancel().await?;

    assert!(!cancelled);

    let status = repo.get_or_init().await?;
    assert!(status.last_error.is_none());

    Ok(())
}

/// Tests that the running loop observes a cancellation.
///
/// Verifies that `is_cancelled` flips to true once the flag is cleared.
///
/// Expected: false while running, true after cancel
#[tokio::test]
async fn is_observed_by_the_running_loop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SyncStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SyncStatusRepository::new(db);
    repo.begin_run(10).await?;
    assert!(!repo.is_cancelled().await?);

    repo.cancel().await?;
    assert!(repo.is_cancelled().await?);

    Ok(())
}
