use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::growth_history::GrowthHistoryRepository, error::AppError};

/// Starts the growth-history scheduler.
///
/// Once a day, at midnight UTC, a member-count sample is recorded for every
/// listing whose count is known. Listings that were never synced have no
/// count and are skipped.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 0 0 * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = record_growth_samples(&db).await {
                tracing::error!("Error recording growth samples: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Growth history scheduler started");

    Ok(())
}

/// Records one sample per listing with a known member count.
async fn record_growth_samples(db: &DatabaseConnection) -> Result<(), DbErr> {
    let servers = entity::prelude::Server::find().all(db).await?;

    let repo = GrowthHistoryRepository::new(db);
    let mut recorded = 0;

    for server in servers {
        let Some(member_count) = server.current_member_count else {
            continue;
        };

        if let Err(e) = repo.record_sample(&server.id, member_count).await {
            tracing::error!("Failed to record growth sample for {}: {}", server.id, e);
            continue;
        }
        recorded += 1;
    }

    tracing::info!("Recorded {} growth samples", recorded);
    Ok(())
}
