//! Server listing factory for creating test server entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test server listings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let server = ServerFactory::new(&db)
///     .id("srv-1")
///     .link("discord.gg/abc123")
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    link: String,
    description: Option<String>,
    icon_url: Option<String>,
    banner_url: Option<String>,
    current_member_count: Option<i32>,
    online_member_count: Option<i32>,
    is_partner: bool,
    last_synced: Option<DateTime<Utc>>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - id: `"server-{n}"` where n is auto-incremented
    /// - name: `"Server {n}"`
    /// - link: `"https://discord.gg/invite{n}"`
    /// - everything else empty / false / unsynced
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("server-{}", id),
            name: format!("Server {}", id),
            link: format!("https://discord.gg/invite{}", id),
            description: None,
            icon_url: None,
            banner_url: None,
            current_member_count: None,
            online_member_count: None,
            is_partner: false,
            last_synced: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn icon_url(mut self, icon_url: Option<String>) -> Self {
        self.icon_url = icon_url;
        self
    }

    pub fn banner_url(mut self, banner_url: Option<String>) -> Self {
        self.banner_url = banner_url;
        self
    }

    pub fn member_counts(mut self, current: Option<i32>, online: Option<i32>) -> Self {
        self.current_member_count = current;
        self.online_member_count = online;
        self
    }

    pub fn is_partner(mut self, is_partner: bool) -> Self {
        self.is_partner = is_partner;
        self
    }

    pub fn last_synced(mut self, last_synced: Option<DateTime<Utc>>) -> Self {
        self.last_synced = last_synced;
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            link: ActiveValue::Set(self.link),
            description: ActiveValue::Set(self.description),
            icon_url: ActiveValue::Set(self.icon_url),
            banner_url: ActiveValue::Set(self.banner_url),
            current_member_count: ActiveValue::Set(self.current_member_count),
            online_member_count: ActiveValue::Set(self.online_member_count),
            is_partner: ActiveValue::Set(self.is_partner),
            created_at: ActiveValue::Set(Utc::now()),
            last_synced: ActiveValue::Set(self.last_synced),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server listing with default values.
///
/// Shorthand for `ServerFactory::new(db).build().await`.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}
