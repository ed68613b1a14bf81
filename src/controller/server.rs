use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::server::{
        ListServersParam, MemberCountRange, PartnerFilter, ServerSort, UpdateServerDto,
    },
    service::server::ServerService,
    state::AppState,
};

const MAX_PER_PAGE: u64 = 100;

#[derive(Deserialize)]
pub struct ListServersQuery {
    /// 1-indexed page number.
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub search: Option<String>,
    /// Legacy partners-only toggle, kept for older clients.
    pub partner: Option<bool>,
    /// `all` / `partners` / `non-partners`.
    pub partner_filter: Option<String>,
    /// Member-count bucket, e.g. `100-500` or `5000+`.
    pub member_count_range: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    /// Legacy single-key sort, kept for older clients.
    pub sort: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

impl ListServersQuery {
    fn into_param(self) -> ListServersParam {
        let partner_filter = self.partner_filter();

        ListServersParam {
            page: self.page.max(1),
            per_page: self.limit.clamp(1, MAX_PER_PAGE),
            search: self.search.filter(|s| !s.trim().is_empty()),
            partner_filter,
            member_count_range: self
                .member_count_range
                .as_deref()
                .and_then(MemberCountRange::parse),
            sort: ServerSort::resolve(
                self.sort_by.as_deref(),
                self.sort_order.as_deref(),
                self.sort.as_deref(),
            ),
        }
    }

    /// The explicit filter wins; the legacy `partner=true` toggle applies
    /// only when the explicit one is absent or `all`.
    fn partner_filter(&self) -> PartnerFilter {
        let explicit = self
            .partner_filter
            .as_deref()
            .map(PartnerFilter::parse)
            .unwrap_or_default();

        if explicit == PartnerFilter::All && self.partner == Some(true) {
            PartnerFilter::Partners
        } else {
            explicit
        }
    }
}

/// List server listings.
///
/// Public endpoint with search, partner and member-count filters, sorting,
/// and pagination.
///
/// # Returns
/// - `200 OK` - Page of listings with pagination metadata
/// - `500 Internal Server Error` - Database error
pub async fn list_servers(
    State(state): State<AppState>,
    Query(query): Query<ListServersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = ServerService::new(&state.db).list(&query.into_param()).await?;

    Ok(Json(page))
}

/// Get a single server listing.
///
/// # Returns
/// - `200 OK` - The listing
/// - `404 Not Found` - No listing with that id
pub async fn get_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let listing = ServerService::new(&state.db).get(&id).await?;

    Ok(Json(listing))
}

/// Get a listing's recent member-count history.
///
/// # Returns
/// - `200 OK` - Samples in chronological order
/// - `404 Not Found` - No listing with that id
pub async fn get_server_growth(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let samples = ServerService::new(&state.db).growth(&id).await?;

    Ok(Json(samples))
}

/// Update a listing's partner status.
///
/// # Access Control
/// - `Admin` - Only admins can update listings
///
/// # Returns
/// - `200 OK` - The updated listing
/// - `400 Bad Request` - Missing or invalid `is_partner` value
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No listing with that id
pub async fn update_server(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<UpdateServerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let listing = ServerService::new(&state.db).update(&id, payload).await?;

    Ok(Json(listing))
}

/// Delete a listing and its dependent rows.
///
/// # Access Control
/// - `Admin` - Only admins can delete listings
///
/// # Returns
/// - `204 No Content` - Listing deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - No listing with that id
pub async fn delete_server(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ServerService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
