use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the single-server sync operation.
///
/// The bulk orchestrator absorbs these into its `failed` counter (or skips
/// them, for the permanent per-record conditions); the interactive sync
/// endpoint maps each variant to a structured HTTP response.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The referenced server record does not exist.
    #[error("Server not found")]
    ServerNotFound,

    /// The stored link could not be reduced to an invite code. Permanent for
    /// this record until an admin fixes the link.
    #[error("Could not parse invite code from server link.")]
    UnparseableInvite,

    /// Discord returned 404 for the invite code.
    #[error("Invite link is invalid or expired.")]
    InviteNotFound,

    /// Rate limited on every attempt up to the retry ceiling.
    ///
    /// `retry_after` carries Discord's most recent hint, in seconds.
    #[error("Rate limited by Discord")]
    RateLimited { retry_after: f64 },

    /// Non-retryable upstream error (non-2xx, non-429, non-404).
    #[error("Failed to fetch from Discord: {message}")]
    Upstream { status: u16, message: String },

    /// The invite response carried no guild object.
    #[error("Invite data did not contain server info.")]
    MissingGuild,

    /// Transport-level failure talking to Discord.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// Database failure while persisting the sync result.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

#[derive(Serialize)]
struct RateLimitedDto {
    error: String,
    retry_after: f64,
}

impl IntoResponse for SyncError {
    fn into_response(self) -> Response {
        match self {
            Self::ServerNotFound | Self::InviteNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::UnparseableInvite | Self::MissingGuild => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::RateLimited { retry_after } => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(RateLimitedDto {
                    error: "Rate limited by Discord".to_string(),
                    retry_after,
                }),
            )
                .into_response(),
            Self::Upstream { status, message } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    Json(ErrorDto {
                        error: format!("Failed to fetch from Discord: {}", message),
                    }),
                )
                    .into_response()
            }
            err => crate::error::InternalServerError(err).into_response(),
        }
    }
}
