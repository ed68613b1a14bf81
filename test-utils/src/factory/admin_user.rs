//! Admin user factory for creating moderator accounts in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test admin users with customizable fields.
pub struct AdminUserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    username: String,
    avatar: Option<String>,
    added_by: String,
}

impl<'a> AdminUserFactory<'a> {
    /// Creates a new AdminUserFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented numeric string
    /// - username: `"Admin {n}"`
    /// - avatar: `None`
    /// - added_by: `"system"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: format!("{}", 900000000 + id),
            username: format!("Admin {}", id),
            avatar: None,
            added_by: "system".to_string(),
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn added_by(mut self, added_by: impl Into<String>) -> Self {
        self.added_by = added_by.into();
        self
    }

    /// Builds and inserts the admin user into the database.
    pub async fn build(self) -> Result<entity::admin_user::Model, DbErr> {
        entity::admin_user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            username: ActiveValue::Set(self.username),
            avatar: ActiveValue::Set(self.avatar),
            added_by: ActiveValue::Set(self.added_by),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin user with default values.
pub async fn create_admin_user(
    db: &DatabaseConnection,
) -> Result<entity::admin_user::Model, DbErr> {
    AdminUserFactory::new(db).build().await
}
