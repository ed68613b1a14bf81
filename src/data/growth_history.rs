//! Member-count growth history repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Repository providing database operations for growth samples.
pub struct GrowthHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GrowthHistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record_sample(
        &self,
        server_id: &str,
        member_count: i32,
    ) -> Result<entity::growth_history::Model, DbErr> {
        entity::growth_history::ActiveModel {
            id: ActiveValue::NotSet,
            server_id: ActiveValue::Set(server_id.to_string()),
            member_count: ActiveValue::Set(member_count),
            recorded_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Lists the most recent samples for a listing, oldest first so charts
    /// read left to right.
    pub async fn list_for_server(
        &self,
        server_id: &str,
        limit: u64,
    ) -> Result<Vec<entity::growth_history::Model>, DbErr> {
        let mut samples = entity::prelude::GrowthHistory::find()
            .filter(entity::growth_history::Column::ServerId.eq(server_id))
            .order_by_desc(entity::growth_history::Column::RecordedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        samples.reverse();
        Ok(samples)
    }

    /// Removes every sample referencing a listing. Used when the listing
    /// itself is deleted.
    pub async fn delete_for_server(&self, server_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::GrowthHistory::delete_many()
            .filter(entity::growth_history::Column::ServerId.eq(server_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
