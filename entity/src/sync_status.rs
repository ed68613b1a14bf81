use sea_orm::entity::prelude::*;

/// Bulk-sync coordination record. The table holds exactly one row, keyed by a
/// fixed id, and acts as the cross-process claim on the sync job. `updated_at`
/// is the heartbeat that makes stale runs detectable.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sync_status")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub is_running: bool,
    pub current: i32,
    pub total: i32,
    pub failed: i32,
    pub started_at: Option<DateTimeUtc>,
    pub completed_at: Option<DateTimeUtc>,
    pub last_error: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
