use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::{
    controller::{admin, favorite, server, sync},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/servers", get(server::list_servers))
        .route("/api/servers/{id}", get(server::get_server))
        .route("/api/servers/{id}", patch(server::update_server))
        .route("/api/servers/{id}", delete(server::delete_server))
        .route("/api/servers/{id}/growth", get(server::get_server_growth))
        .route("/api/servers/{id}/sync", post(sync::sync_server))
        .route(
            "/api/admin/sync-all",
            get(sync::get_sync_status)
                .post(sync::start_bulk_sync)
                .delete(sync::cancel_bulk_sync),
        )
        .route(
            "/api/admin/users",
            get(admin::list_admins).post(admin::add_admin),
        )
        .route(
            "/api/admin/users/{discord_id}",
            delete(admin::remove_admin),
        )
        .route(
            "/api/favorites",
            get(favorite::list_favorites).post(favorite::add_favorite),
        )
        .route(
            "/api/favorites/{server_id}",
            delete(favorite::remove_favorite),
        )
        .route(
            "/api/favorites/check/{server_id}",
            get(favorite::check_favorite),
        )
}
