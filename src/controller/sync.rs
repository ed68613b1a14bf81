use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{api::MessageDto, sync::SyncedServerDto},
    service::sync::SyncService,
    state::AppState,
};

/// Sync one listing against its Discord invite.
///
/// Fetches the invite, refreshes the listing's name, counts, and assets,
/// and returns the resolved metadata.
///
/// # Access Control
/// - `Admin` - Only admins can trigger a sync
///
/// # Returns
/// - `200 OK` - Resolved metadata, already persisted
/// - `400 Bad Request` - Link unparseable or invite carried no server info
/// - `404 Not Found` - Listing missing or invite expired
/// - `429 Too Many Requests` - Rate limited after retries, with retry_after
pub async fn sync_server(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let info = SyncService::new(&state.db, &state.discord)
        .sync_server(&id)
        .await?;

    Ok(Json(SyncedServerDto::from_info(info)))
}

/// Get the bulk-sync status.
///
/// Reading the status also reclaims a run whose process died, so pollers
/// never see a permanently stuck job.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Current status record
pub async fn get_sync_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let report = SyncService::new(&state.db, &state.discord).status().await?;

    Ok(Json(report))
}

/// Start a bulk sync over every listing.
///
/// The work runs as a detached background task; this returns as soon as the
/// run is claimed. Poll the status endpoint for progress.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `202 Accepted` - Run claimed, with the initial status record
/// - `409 Conflict` - Another run is already in progress
pub async fn start_bulk_sync(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let report = SyncService::new(&state.db, &state.discord)
        .start_bulk()
        .await?;

    tracing::info!("Bulk sync of {} listings started by {}", report.total, user_id);
    Ok((StatusCode::ACCEPTED, Json(report)))
}

/// Cancel the active bulk sync.
///
/// Cancellation is cooperative: the run stops at its next iteration.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Cancellation requested
/// - `400 Bad Request` - No run was active
pub async fn cancel_bulk_sync(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let cancelled = SyncService::new(&state.db, &state.discord)
        .cancel_bulk()
        .await?;

    if !cancelled {
        return Err(AppError::BadRequest("No sync running".to_string()));
    }

    tracing::info!("Bulk sync cancelled by {}", user_id);
    Ok(Json(MessageDto {
        message: "Sync cancelled".to_string(),
    }))
}
