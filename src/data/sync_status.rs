//! Singleton sync-status repository.
//!
//! The `sync_status` table holds exactly one row, keyed by `SYNC_STATUS_ID`.
//! It is the coordination point between the detached bulk-sync task, status
//! pollers, and cancellers — across process restarts. Every write bumps
//! `updated_at`; that heartbeat is what lets any reader detect and reclaim a
//! run whose process died.

use chrono::{Duration, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

/// Fixed primary key of the singleton status row.
pub const SYNC_STATUS_ID: &str = "sync-all";

/// Heartbeats older than this mark a running job as dead.
const STALE_AFTER_MINUTES: i64 = 10;

/// Marker written to `last_error` when a run is cancelled.
pub const CANCELLED_MARKER: &str = "Cancelled by user";

/// Marker written to `last_error` when a stale run is reclaimed.
const STALE_MARKER: &str = "Previous sync went stale and was reclaimed";

/// Repository providing access to the singleton sync-status record.
pub struct SyncStatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SyncStatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the singleton row, creating the idle default on first access.
    pub async fn get_or_init(&self) -> Result<entity::sync_status::Model, DbErr> {
        let existing = entity::prelude::SyncStatus::find_by_id(SYNC_STATUS_ID)
            .one(self.db)
            .await?;

        match existing {
            Some(model) => Ok(model),
            None => {
                entity::sync_status::ActiveModel {
                    id: ActiveValue::Set(SYNC_STATUS_ID.to_string()),
                    is_running: ActiveValue::Set(false),
                    current: ActiveValue::Set(0),
                    total: ActiveValue::Set(0),
                    failed: ActiveValue::Set(0),
                    started_at: ActiveValue::Set(None),
                    completed_at: ActiveValue::Set(None),
                    last_error: ActiveValue::Set(None),
                    updated_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Reads the status, reclaiming a stale run as a side effect.
    ///
    /// A row showing `is_running = true` with a heartbeat older than the
    /// staleness threshold belongs to a process that died mid-run; the
    /// reader flips `is_running` off and annotates `last_error` so the lock
    /// self-heals without an external watchdog.
    pub async fn current(&self) -> Result<entity::sync_status::Model, DbErr> {
        let status = self.get_or_init().await?;

        if status.is_running
            && Utc::now() - status.updated_at > Duration::minutes(STALE_AFTER_MINUTES)
        {
            let mut active: entity::sync_status::ActiveModel = status.into();
            active.is_running = ActiveValue::Set(false);
            active.last_error = ActiveValue::Set(Some(STALE_MARKER.to_string()));
            active.updated_at = ActiveValue::Set(Utc::now());

            return active.update(self.db).await;
        }

        Ok(status)
    }

    /// Claims the singleton for a new run and resets all counters.
    ///
    /// The caller must have checked `current()` for an active run first; the
    /// claim is optimistic, not transactional — a lost race means duplicate
    /// work on idempotent per-record writes, never corruption.
    pub async fn begin_run(&self, total: i32) -> Result<entity::sync_status::Model, DbErr> {
        let existing = self.get_or_init().await?;

        let mut active: entity::sync_status::ActiveModel = existing.into();
        active.is_running = ActiveValue::Set(true);
        active.current = ActiveValue::Set(0);
        active.total = ActiveValue::Set(total);
        active.failed = ActiveValue::Set(0);
        active.started_at = ActiveValue::Set(Some(Utc::now()));
        active.completed_at = ActiveValue::Set(None);
        active.last_error = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Writes progress counters and bumps the heartbeat.
    ///
    /// Called once per processed server regardless of outcome — the
    /// heartbeat must advance on every iteration for staleness detection to
    /// have a live signal. `last_error` is only written when a new error
    /// message is supplied.
    pub async fn record_progress(
        &self,
        current: i32,
        failed: i32,
        last_error: Option<String>,
    ) -> Result<(), DbErr> {
        let mut update = entity::prelude::SyncStatus::update_many()
            .filter(entity::sync_status::Column::Id.eq(SYNC_STATUS_ID))
            .col_expr(entity::sync_status::Column::Current, Expr::value(current))
            .col_expr(entity::sync_status::Column::Failed, Expr::value(failed))
            .col_expr(
                entity::sync_status::Column::UpdatedAt,
                Expr::value(Utc::now()),
            );

        if let Some(last_error) = last_error {
            update = update.col_expr(
                entity::sync_status::Column::LastError,
                Expr::value(Some(last_error)),
            );
        }

        update.exec(self.db).await?;
        Ok(())
    }

    /// Whether the run has been cancelled (or the row vanished).
    ///
    /// Raw read, no staleness reclaim: the running loop's own progress
    /// writes keep the heartbeat fresh.
    pub async fn is_cancelled(&self) -> Result<bool, DbErr> {
        let status = entity::prelude::SyncStatus::find_by_id(SYNC_STATUS_ID)
            .one(self.db)
            .await?;

        Ok(!status.map(|s| s.is_running).unwrap_or(false))
    }

    /// Requests cooperative cancellation of the active run.
    ///
    /// # Returns
    /// - `Ok(true)` - A run was active and has been flagged to stop
    /// - `Ok(false)` - Nothing was running
    pub async fn cancel(&self) -> Result<bool, DbErr> {
        let status = self.get_or_init().await?;

        if !status.is_running {
            return Ok(false);
        }

        let mut active: entity::sync_status::ActiveModel = status.into();
        active.is_running = ActiveValue::Set(false);
        active.last_error = ActiveValue::Set(Some(CANCELLED_MARKER.to_string()));
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;
        Ok(true)
    }

    /// Final cleanup write for a run, on every exit path.
    ///
    /// Clears `is_running`, stamps `completed_at`, and bumps the heartbeat.
    /// An existing `last_error` (cancellation marker, last per-record
    /// failure) is preserved unless a loop-level error is supplied.
    pub async fn finish(&self, last_error: Option<String>) -> Result<(), DbErr> {
        let status = self.get_or_init().await?;

        let mut active: entity::sync_status::ActiveModel = status.into();
        active.is_running = ActiveValue::Set(false);
        active.completed_at = ActiveValue::Set(Some(Utc::now()));
        active.updated_at = ActiveValue::Set(Utc::now());

        if let Some(last_error) = last_error {
            active.last_error = ActiveValue::Set(Some(last_error));
        }

        active.update(self.db).await?;
        Ok(())
    }
}
