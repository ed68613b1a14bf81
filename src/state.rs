//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::discord::client::DiscordClient;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during startup and cloned for each request through
/// Axum's state extraction. All fields are cheap to clone:
/// `DatabaseConnection` is a connection pool and `DiscordClient` wraps a
/// `reqwest::Client`, which is `Arc`-backed internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for Discord's invite API, shared by the interactive sync
    /// endpoint and the bulk sync orchestrator.
    pub discord: DiscordClient,
}

impl AppState {
    pub fn new(db: DatabaseConnection, discord: DiscordClient) -> Self {
        Self { db, discord }
    }
}
