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
    model::admin::{AddAdminDto, AddAdminParam},
    service::admin::AdminService,
    state::AppState,
};

/// List moderator accounts.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Moderator accounts, oldest grant first
pub async fn list_admins(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let admins = AdminService::new(&state.db).list().await?;

    Ok(Json(admins))
}

/// Grant moderator access to a Discord user.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new moderator account
/// - `409 Conflict` - The user is already an admin
pub async fn add_admin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let acting_user_id = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let admin = AdminService::new(&state.db)
        .add(AddAdminParam {
            discord_id: payload.discord_id,
            username: payload.username,
            avatar: payload.avatar,
            added_by: acting_user_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(admin)))
}

/// Revoke a moderator account.
///
/// # Access Control
/// - `Admin` - Admins cannot revoke their own access
///
/// # Returns
/// - `204 No Content` - Account revoked
/// - `400 Bad Request` - Attempted self-revocation
/// - `404 Not Found` - No such moderator account
pub async fn remove_admin(
    State(state): State<AppState>,
    session: Session,
    Path(discord_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let acting_user_id = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AdminService::new(&state.db)
        .remove(&discord_id, &acting_user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
