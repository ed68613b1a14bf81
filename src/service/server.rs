use sea_orm::DatabaseConnection;

use crate::{
    data::{
        favorite::FavoriteRepository, growth_history::GrowthHistoryRepository,
        server::ServerRepository,
    },
    error::AppError,
    model::server::{
        GrowthSample, ListServersParam, PaginatedServers, ServerListing, UpdateServerDto,
    },
};

/// How many growth samples the history endpoint returns at most.
const GROWTH_SAMPLE_LIMIT: u64 = 90;

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists server listings with filtering, sorting, and pagination.
    pub async fn list(&self, param: &ListServersParam) -> Result<PaginatedServers, AppError> {
        let repo = ServerRepository::new(self.db);

        let (servers, total) = repo.list_paginated(param).await?;

        let total_pages = if param.per_page > 0 {
            total.div_ceil(param.per_page)
        } else {
            0
        };

        Ok(PaginatedServers {
            servers: servers.into_iter().map(ServerListing::from_entity).collect(),
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Gets a single listing by id.
    pub async fn get(&self, id: &str) -> Result<ServerListing, AppError> {
        let repo = ServerRepository::new(self.db);

        let server = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Server not found".to_string()))?;

        Ok(ServerListing::from_entity(server))
    }

    /// Gets the recent member-count history of a listing, oldest first.
    pub async fn growth(&self, id: &str) -> Result<Vec<GrowthSample>, AppError> {
        if ServerRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Server not found".to_string()));
        }

        let samples = GrowthHistoryRepository::new(self.db)
            .list_for_server(id, GROWTH_SAMPLE_LIMIT)
            .await?;

        Ok(samples.into_iter().map(GrowthSample::from_entity).collect())
    }

    /// Applies a partial update to a listing. Only the partner flag is
    /// mutable through this path, and a body without it is rejected.
    pub async fn update(&self, id: &str, dto: UpdateServerDto) -> Result<ServerListing, AppError> {
        let repo = ServerRepository::new(self.db);

        let Some(is_partner) = dto.is_partner else {
            return Err(AppError::BadRequest("Invalid is_partner value".to_string()));
        };

        let server = repo
            .set_partner(id, is_partner)
            .await?
            .ok_or_else(|| AppError::NotFound("Server not found".to_string()))?;

        Ok(ServerListing::from_entity(server))
    }

    /// Deletes a listing along with its favorites and growth history.
    ///
    /// Dependent rows go first so a failure partway leaves no orphaned
    /// references behind a surviving listing.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = ServerRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Server not found".to_string()));
        }

        FavoriteRepository::new(self.db).delete_for_server(id).await?;
        GrowthHistoryRepository::new(self.db)
            .delete_for_server(id)
            .await?;
        repo.delete_by_id(id).await?;

        tracing::info!("Deleted server listing {}", id);
        Ok(())
    }
}
