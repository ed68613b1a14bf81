//! Server directory backend.
//!
//! A discovery service for Discord servers: users browse, search, and favorite
//! listings; admins manage listings, partner status, and moderator accounts;
//! background work syncs live metadata from Discord's invite API.
//!
//! # Architecture
//!
//! The backend follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//! - **Discord Gateway** (`discord/`) - Invite resolution and the rate-limit-aware Discord client
//! - **Scheduler** (`scheduler/`) - Cron jobs for automated tasks (growth-history samples)

mod config;
mod controller;
mod data;
mod discord;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use crate::{config::Config, discord::client::DiscordClient, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::session_layer(&db).await?;
    let http_client = startup::setup_reqwest_client()?;

    let state = AppState::new(db.clone(), DiscordClient::new(http_client));

    tracing::info!("Starting server directory backend");

    // Daily growth-history sampling
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::growth_history::start_scheduler(scheduler_db).await {
            tracing::error!("Growth history scheduler error: {}", e);
        }
    });

    let app = router::router()
        .layer(session_layer)
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
