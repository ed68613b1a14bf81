//! Moderator account domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A moderator account as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUser {
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub added_by: String,
    pub added_at: DateTime<Utc>,
}

impl AdminUser {
    pub fn from_entity(entity: entity::admin_user::Model) -> Self {
        Self {
            discord_id: entity.discord_id,
            username: entity.username,
            avatar: entity.avatar,
            added_by: entity.added_by,
            added_at: entity.added_at,
        }
    }
}

/// Body accepted when adding a moderator account.
#[derive(Debug, Deserialize)]
pub struct AddAdminDto {
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
}

/// Parameters for creating a moderator account.
#[derive(Debug, Clone)]
pub struct AddAdminParam {
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub added_by: String,
}
