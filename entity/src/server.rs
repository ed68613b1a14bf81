use sea_orm::entity::prelude::*;

/// A Discord server listing. The primary key is the externally assigned
/// listing id, not an auto-increment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "server")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    /// Invite reference: a full invite URL, a `host/code` pair, or a bare code.
    pub link: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub current_member_count: Option<i32>,
    pub online_member_count: Option<i32>,
    pub is_partner: bool,
    pub created_at: DateTimeUtc,
    pub last_synced: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
