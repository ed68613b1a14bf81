use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::{favorite::FavoriteRepository, server::ServerRepository},
    error::AppError,
    model::{favorite::FavoriteWithServer, server::ServerListing},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's favorites joined with their listings, most recently
    /// added first. Favorites whose listing has since been deleted are
    /// dropped from the result.
    pub async fn list(&self, user_id: &str) -> Result<Vec<FavoriteWithServer>, AppError> {
        let favorites = FavoriteRepository::new(self.db).list_for_user(user_id).await?;

        let server_ids: Vec<String> = favorites.iter().map(|f| f.server_id.clone()).collect();
        let servers = ServerRepository::new(self.db).find_by_ids(&server_ids).await?;

        let mut by_id: HashMap<String, entity::server::Model> =
            servers.into_iter().map(|s| (s.id.clone(), s)).collect();

        Ok(favorites
            .into_iter()
            .filter_map(|favorite| {
                by_id.remove(&favorite.server_id).map(|server| FavoriteWithServer {
                    server: ServerListing::from_entity(server),
                    favorited_at: favorite.added_at,
                })
            })
            .collect())
    }

    /// Favorites a listing for a user.
    pub async fn add(&self, user_id: &str, server_id: &str) -> Result<(), AppError> {
        if ServerRepository::new(self.db)
            .find_by_id(server_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Server not found".to_string()));
        }

        let repo = FavoriteRepository::new(self.db);

        if repo.find(user_id, server_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "Server is already favorited".to_string(),
            ));
        }

        repo.create(user_id, server_id).await?;
        Ok(())
    }

    /// Removes a favorite.
    pub async fn remove(&self, user_id: &str, server_id: &str) -> Result<(), AppError> {
        let removed = FavoriteRepository::new(self.db)
            .delete(user_id, server_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound("Favorite not found".to_string()));
        }

        Ok(())
    }

    /// Whether a user has favorited a listing.
    pub async fn check(&self, user_id: &str, server_id: &str) -> Result<bool, AppError> {
        Ok(FavoriteRepository::new(self.db)
            .find(user_id, server_id)
            .await?
            .is_some())
    }
}
