//! Growth-history factory for creating member-count samples.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a growth-history sample for the given server.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Server the sample belongs to
/// - `member_count` - Sampled member count
///
/// # Returns
/// - `Ok(entity::growth_history::Model)` - Created sample
/// - `Err(DbErr)` - Database error during insert
pub async fn create_growth_sample(
    db: &DatabaseConnection,
    server_id: &str,
    member_count: i32,
) -> Result<entity::growth_history::Model, DbErr> {
    entity::growth_history::ActiveModel {
        server_id: ActiveValue::Set(server_id.to_string()),
        member_count: ActiveValue::Set(member_count),
        recorded_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
