//! Favorite domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::server::ServerListing;

/// Body accepted when adding a favorite.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteDto {
    pub server_id: String,
}

/// A favorited server joined with its surviving listing.
#[derive(Debug, Serialize)]
pub struct FavoriteWithServer {
    #[serde(flatten)]
    pub server: ServerListing,
    pub favorited_at: DateTime<Utc>,
}

/// Response for the favorite-check endpoint.
#[derive(Debug, Serialize)]
pub struct FavoriteCheckDto {
    pub favorited: bool,
}
