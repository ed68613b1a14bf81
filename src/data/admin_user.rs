//! Moderator account repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::admin::AddAdminParam;

/// Repository providing database operations for moderator accounts.
pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find_by_id(discord_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find()
            .order_by_asc(entity::admin_user::Column::AddedAt)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        param: AddAdminParam,
    ) -> Result<entity::admin_user::Model, DbErr> {
        entity::admin_user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id),
            username: ActiveValue::Set(param.username),
            avatar: ActiveValue::Set(param.avatar),
            added_by: ActiveValue::Set(param.added_by),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Removes a moderator account.
    ///
    /// # Returns
    /// - `Ok(true)` - The account existed and was removed
    /// - `Ok(false)` - No account with that id
    pub async fn delete(&self, discord_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AdminUser::delete_by_id(discord_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
