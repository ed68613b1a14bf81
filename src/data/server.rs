//! Server listing repository.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{
    server::{ListServersParam, PartnerFilter, ServerSort},
    sync::{SyncTarget, SyncedServerInfo},
};

/// Repository providing database operations for server listings.
pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::server::Model>, DbErr> {
        entity::prelude::Server::find_by_id(id).one(self.db).await
    }

    /// Lists servers with filtering, sorting, and pagination.
    ///
    /// The search term matches either a name substring (case-insensitive per
    /// SQLite's LIKE) or the exact listing id. Partner and member-count
    /// filters narrow the result; the sort is applied before pagination.
    ///
    /// # Arguments
    /// - `param` - Filter, sort, and pagination parameters
    ///
    /// # Returns
    /// - `Ok((servers, total))` - Page of matching servers and the total
    ///   match count across all pages
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_paginated(
        &self,
        param: &ListServersParam,
    ) -> Result<(Vec<entity::server::Model>, u64), DbErr> {
        let mut query = entity::prelude::Server::find();

        if let Some(search) = &param.search {
            query = query.filter(
                Condition::any()
                    .add(entity::server::Column::Name.contains(search))
                    .add(entity::server::Column::Id.eq(search.clone())),
            );
        }

        match param.partner_filter {
            PartnerFilter::Partners => {
                query = query.filter(entity::server::Column::IsPartner.eq(true));
            }
            PartnerFilter::NonPartners => {
                query = query.filter(entity::server::Column::IsPartner.eq(false));
            }
            PartnerFilter::All => {}
        }

        if let Some(range) = param.member_count_range {
            query = query.filter(entity::server::Column::CurrentMemberCount.gte(range.min));
            if let Some(max) = range.max {
                query = query.filter(entity::server::Column::CurrentMemberCount.lte(max));
            }
        }

        query = match param.sort {
            ServerSort::Newest => query.order_by_desc(entity::server::Column::CreatedAt),
            ServerSort::Oldest => query.order_by_asc(entity::server::Column::CreatedAt),
            ServerSort::MembersDesc => {
                query.order_by_desc(entity::server::Column::CurrentMemberCount)
            }
            ServerSort::MembersAsc => {
                query.order_by_asc(entity::server::Column::CurrentMemberCount)
            }
            ServerSort::NameAsc => query.order_by_asc(entity::server::Column::Name),
            ServerSort::NameDesc => query.order_by_desc(entity::server::Column::Name),
        };

        let paginator = query.paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        // The public contract is 1-indexed, the paginator is 0-indexed.
        let servers = paginator.fetch_page(param.page.saturating_sub(1)).await?;

        Ok((servers, total))
    }

    /// Sets the partner flag on a listing.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated listing
    /// - `Ok(None)` - No listing with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_partner(
        &self,
        id: &str,
        is_partner: bool,
    ) -> Result<Option<entity::server::Model>, DbErr> {
        let Some(server) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::server::ActiveModel = server.into();
        active.is_partner = ActiveValue::Set(is_partner);

        Ok(Some(active.update(self.db).await?))
    }

    /// Persists the result of a successful sync.
    ///
    /// Name, counts, and the last-synced timestamp are overwritten wholesale.
    /// Icon and banner URLs are written only when the sync resolved one — a
    /// response without a hash must not clear a previously stored URL.
    pub async fn update_synced_info(
        &self,
        id: &str,
        info: &SyncedServerInfo,
    ) -> Result<(), DbErr> {
        let mut update = entity::prelude::Server::update_many()
            .filter(entity::server::Column::Id.eq(id))
            .col_expr(entity::server::Column::Name, Expr::value(info.name.clone()))
            .col_expr(
                entity::server::Column::CurrentMemberCount,
                Expr::value(info.member_count),
            )
            .col_expr(
                entity::server::Column::OnlineMemberCount,
                Expr::value(info.online_count),
            )
            .col_expr(
                entity::server::Column::LastSynced,
                Expr::value(Some(info.synced_at)),
            );

        if let Some(icon_url) = &info.icon_url {
            update = update.col_expr(
                entity::server::Column::IconUrl,
                Expr::value(Some(icon_url.clone())),
            );
        }

        if let Some(banner_url) = &info.banner_url {
            update = update.col_expr(
                entity::server::Column::BannerUrl,
                Expr::value(Some(banner_url.clone())),
            );
        }

        update.exec(self.db).await?;
        Ok(())
    }

    /// Deletes a listing row. Cascading to dependent rows is handled by the
    /// service layer.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing existed and was deleted
    /// - `Ok(false)` - No listing with that id
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Server::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Snapshots the id and invite link of every listing for a bulk sync
    /// run. Listings created after the snapshot are not picked up mid-run.
    pub async fn sync_targets(&self) -> Result<Vec<SyncTarget>, DbErr> {
        let rows: Vec<(String, String)> = entity::prelude::Server::find()
            .select_only()
            .column(entity::server::Column::Id)
            .column(entity::server::Column::Link)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, link)| SyncTarget { id, link })
            .collect())
    }

    /// Fetches listings by id, in no particular order.
    pub async fn find_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<entity::server::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Server::find()
            .filter(entity::server::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }
}
