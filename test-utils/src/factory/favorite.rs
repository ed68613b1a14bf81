//! Favorite factory for creating test favorite rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite linking the given user and server.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user's id
/// - `server_id` - Favorited server's id
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite entity
/// - `Err(DbErr)` - Database error during insert (including unique violation)
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: &str,
    server_id: &str,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        server_id: ActiveValue::Set(server_id.to_string()),
        added_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
