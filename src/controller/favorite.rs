use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::favorite::{AddFavoriteDto, FavoriteCheckDto},
    service::favorite::FavoriteService,
    state::AppState,
};

/// List the logged-in user's favorites with their listings.
///
/// # Returns
/// - `200 OK` - Favorites, most recently added first
/// - `401 Unauthorized` - Not logged in
pub async fn list_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let favorites = FavoriteService::new(&state.db).list(&user_id).await?;

    Ok(Json(favorites))
}

/// Favorite a listing.
///
/// # Returns
/// - `201 Created` - Favorite stored
/// - `400 Bad Request` - Already favorited
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No listing with that id
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session).require(&[]).await?;

    FavoriteService::new(&state.db)
        .add(&user_id, &payload.server_id)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Remove a favorite.
///
/// # Returns
/// - `204 No Content` - Favorite removed
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - The listing was not favorited
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session).require(&[]).await?;

    FavoriteService::new(&state.db)
        .remove(&user_id, &server_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Check whether the logged-in user has favorited a listing.
///
/// # Returns
/// - `200 OK` - `{ "favorited": bool }`
/// - `401 Unauthorized` - Not logged in
pub async fn check_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let favorited = FavoriteService::new(&state.db)
        .check(&user_id, &server_id)
        .await?;

    Ok(Json(FavoriteCheckDto { favorited }))
}
