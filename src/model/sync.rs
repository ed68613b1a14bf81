//! Sync domain models: progress reports, sync targets, and resolved guild
//! metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Snapshot of the bulk-sync status record, as returned to polling clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusReport {
    pub is_running: bool,
    pub current: i32,
    pub total: i32,
    pub failed: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl SyncStatusReport {
    pub fn from_entity(entity: entity::sync_status::Model) -> Self {
        Self {
            is_running: entity.is_running,
            current: entity.current,
            total: entity.total,
            failed: entity.failed,
            started_at: entity.started_at,
            completed_at: entity.completed_at,
            last_error: entity.last_error,
            updated_at: entity.updated_at,
        }
    }
}

/// Unit of work for the bulk orchestrator: one server's id and stored invite
/// reference, captured when the run started.
#[derive(Debug, Clone)]
pub struct SyncTarget {
    pub id: String,
    pub link: String,
}

/// Metadata resolved from a successful invite fetch, ready to persist.
#[derive(Debug, Clone)]
pub struct SyncedServerInfo {
    pub name: String,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub member_count: Option<i32>,
    pub online_count: Option<i32>,
    pub synced_at: DateTime<Utc>,
}

/// Response body for the interactive single-server sync endpoint.
#[derive(Debug, Serialize)]
pub struct SyncedServerDto {
    pub name: String,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub member_count: Option<i32>,
    pub online_count: Option<i32>,
}

impl SyncedServerDto {
    pub fn from_info(info: SyncedServerInfo) -> Self {
        Self {
            name: info.name,
            icon_url: info.icon_url,
            banner_url: info.banner_url,
            member_count: info.member_count,
            online_count: info.online_count,
        }
    }
}
