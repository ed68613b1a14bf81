use crate::data::sync_status::{SyncStatusRepository, CANCELLED_MARKER, SYNC_STATUS_ID};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use test_utils::builder::TestBuilder;

mod begin_run;
mod cancel;
mod current;
mod finish;

/// Helper that inserts the singleton row in a chosen state, bypassing the
/// repository so tests can fabricate heartbeats in the past.
async fn seed_status(
    db: &DatabaseConnection,
    is_running: bool,
    updated_at: chrono::DateTime<Utc>,
) -> Result<entity::sync_status::Model, DbErr> {
    entity::sync_status::ActiveModel {
        id: ActiveValue::Set(SYNC_STATUS_ID.to_string()),
        is_running: ActiveValue::Set(is_running),
        current: ActiveValue::Set(0),
        total: ActiveValue::Set(0),
        failed: ActiveValue::Set(0),
        started_at: ActiveValue::Set(None),
        completed_at: ActiveValue::Set(None),
        last_error: ActiveValue::Set(None),
        updated_at: ActiveValue::Set(updated_at),
    }
    .insert(db)
    .await
}
