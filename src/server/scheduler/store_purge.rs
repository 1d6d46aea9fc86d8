use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, store::MemoryStore};

/// Starts the ephemeral store purge scheduler
///
/// Runs every minute and reclaims the memory of expired locks and abandoned runs.
/// Lookups already ignore expired keys, so a missed sweep only delays the cleanup.
///
/// # Arguments
/// - `store`: In-process store shared with the request handlers
pub async fn start_scheduler(store: MemoryStore) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let store = store.clone();

        Box::pin(async move {
            purge_expired_keys(&store).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Store purge scheduler started");

    Ok(())
}

/// Removes expired keys, returning how many were dropped.
async fn purge_expired_keys(store: &MemoryStore) -> usize {
    let purged = store.purge_expired().await;
    if purged > 0 {
        tracing::debug!(purged, "Purged expired store keys");
    }

    purged
}
