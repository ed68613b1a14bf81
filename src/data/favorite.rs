//! Favorite repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for user favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        user_id: &str,
        server_id: &str,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::ServerId.eq(server_id))
            .one(self.db)
            .await
    }

    /// Creates a favorite, returning the existing row when the pair is
    /// already present. The unique index makes the insert race-safe; the
    /// pre-check keeps the common duplicate case off the error path.
    pub async fn create(
        &self,
        user_id: &str,
        server_id: &str,
    ) -> Result<entity::favorite::Model, DbErr> {
        if let Some(existing) = self.find(user_id, server_id).await? {
            return Ok(existing);
        }

        entity::favorite::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id.to_string()),
            server_id: ActiveValue::Set(server_id.to_string()),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Lists a user's favorites, most recently added first.
    pub async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::AddedAt)
            .all(self.db)
            .await
    }

    /// Removes a favorite.
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite existed and was removed
    /// - `Ok(false)` - The pair was not favorited
    pub async fn delete(&self, user_id: &str, server_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::ServerId.eq(server_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every favorite referencing a listing. Used when the listing
    /// itself is deleted.
    pub async fn delete_for_server(&self, server_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::ServerId.eq(server_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
