//! Sync orchestration: interactive single-server sync and the detached
//! bulk-sync task.

use std::time::Duration;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::{server::ServerRepository, sync_status::SyncStatusRepository},
    discord::{
        client::{guild_banner_url, guild_icon_url},
        invite::extract_invite_code,
        InviteGateway,
    },
    error::{sync::SyncError, AppError},
    model::sync::{SyncStatusReport, SyncTarget, SyncedServerInfo},
};

/// Pause between invite fetches during a bulk run, keeping the request rate
/// well under Discord's invite-endpoint limits.
const REQUEST_DELAY: Duration = Duration::from_millis(600);

pub struct SyncService<'a, G> {
    db: &'a DatabaseConnection,
    gateway: &'a G,
}

impl<'a, G: InviteGateway> SyncService<'a, G> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a G) -> Self {
        Self { db, gateway }
    }

    /// Syncs a single listing and returns the resolved metadata.
    pub async fn sync_server(&self, id: &str) -> Result<SyncedServerInfo, SyncError> {
        let repo = ServerRepository::new(self.db);

        let server = repo
            .find_by_id(id)
            .await?
            .ok_or(SyncError::ServerNotFound)?;

        let info = resolve_listing(self.gateway, &server.link).await?;
        repo.update_synced_info(id, &info).await?;

        Ok(info)
    }

    /// Reads the bulk-sync status, reclaiming a stale run if the previous
    /// process died.
    pub async fn status(&self) -> Result<SyncStatusReport, AppError> {
        let status = SyncStatusRepository::new(self.db).current().await?;

        Ok(SyncStatusReport::from_entity(status))
    }

    /// Starts a bulk sync over every listing as a detached background task.
    ///
    /// Returns the freshly claimed status record; progress is observed by
    /// polling `status()`. Refuses to start while another run holds the
    /// singleton.
    pub async fn start_bulk(&self) -> Result<SyncStatusReport, AppError>
    where
        G: Clone + Send + Sync + 'static,
    {
        let status_repo = SyncStatusRepository::new(self.db);

        if status_repo.current().await?.is_running {
            return Err(AppError::Conflict(
                "A sync is already in progress".to_string(),
            ));
        }

        // Snapshot before claiming so the claimed total matches the work.
        let targets = ServerRepository::new(self.db).sync_targets().await?;
        let status = status_repo.begin_run(targets.len() as i32).await?;

        let db = self.db.clone();
        let gateway = self.gateway.clone();
        tokio::spawn(async move {
            run_bulk_sync(db, gateway, targets).await;
        });

        Ok(SyncStatusReport::from_entity(status))
    }

    /// Requests cancellation of the active bulk run.
    ///
    /// # Returns
    /// - `Ok(true)` - A run was active and will stop at its next iteration
    /// - `Ok(false)` - No run was active
    pub async fn cancel_bulk(&self) -> Result<bool, AppError> {
        Ok(SyncStatusRepository::new(self.db).cancel().await?)
    }
}

/// Resolves a stored invite link to fresh listing metadata.
async fn resolve_listing<G: InviteGateway>(
    gateway: &G,
    link: &str,
) -> Result<SyncedServerInfo, SyncError> {
    let code = extract_invite_code(link);
    if code.is_empty() {
        return Err(SyncError::UnparseableInvite);
    }

    let response = gateway.fetch_invite(&code).await?;
    let guild = response.guild.ok_or(SyncError::MissingGuild)?;

    Ok(SyncedServerInfo {
        name: guild.name,
        icon_url: guild_icon_url(&guild.id, guild.icon.as_deref()),
        banner_url: guild_banner_url(&guild.id, guild.banner.as_deref()),
        member_count: response.approximate_member_count,
        online_count: response.approximate_presence_count,
        synced_at: Utc::now(),
    })
}

/// Body of the detached bulk-sync task.
///
/// Runs the loop and then performs the cleanup write no matter how the loop
/// exited, so the singleton never stays claimed by a finished task.
async fn run_bulk_sync<G: InviteGateway>(
    db: DatabaseConnection,
    gateway: G,
    targets: Vec<SyncTarget>,
) {
    let loop_error = run_sync_loop(&db, &gateway, &targets)
        .await
        .err()
        .map(|err| err.to_string());

    if let Some(err) = &loop_error {
        tracing::error!("Bulk sync aborted: {}", err);
    }

    if let Err(err) = SyncStatusRepository::new(&db).finish(loop_error).await {
        tracing::error!("Failed to finalize sync status: {}", err);
    }
}

/// Processes the snapshot one listing at a time.
///
/// Each iteration re-reads the status row to observe cancellation, syncs one
/// listing, writes progress (the heartbeat), and pauses before the next
/// fetch. Listings whose link cannot produce an invite code, or whose invite
/// resolves without guild data, are skipped without counting as failures;
/// any other error increments `failed` and is surfaced via `last_error`.
///
/// Only status-row write failures abort the run: without a working
/// heartbeat the job would look dead to observers anyway.
async fn run_sync_loop<G: InviteGateway>(
    db: &DatabaseConnection,
    gateway: &G,
    targets: &[SyncTarget],
) -> Result<(), DbErr> {
    let server_repo = ServerRepository::new(db);
    let status_repo = SyncStatusRepository::new(db);

    let mut current = 0;
    let mut failed = 0;

    for target in targets {
        if status_repo.is_cancelled().await? {
            tracing::info!(
                "Bulk sync stopped after {} of {} listings",
                current,
                targets.len()
            );
            return Ok(());
        }

        current += 1;

        let last_error = match sync_one(&server_repo, gateway, target).await {
            Ok(()) => None,
            Err(SyncError::UnparseableInvite) | Err(SyncError::MissingGuild) => {
                tracing::debug!("Skipping listing {}: no usable invite", target.id);
                None
            }
            Err(err) => {
                failed += 1;
                tracing::warn!("Sync failed for listing {}: {}", target.id, err);
                Some(format!("{}: {}", target.id, err))
            }
        };

        status_repo
            .record_progress(current, failed, last_error)
            .await?;

        tokio::time::sleep(REQUEST_DELAY).await;
    }

    tracing::info!(
        "Bulk sync completed: {} listings, {} failed",
        current,
        failed
    );
    Ok(())
}

async fn sync_one<G: InviteGateway>(
    server_repo: &ServerRepository<'_>,
    gateway: &G,
    target: &SyncTarget,
) -> Result<(), SyncError> {
    let info = resolve_listing(gateway, &target.link).await?;
    server_repo.update_synced_info(&target.id, &info).await?;
    Ok(())
}
