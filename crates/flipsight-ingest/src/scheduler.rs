//! Cadenced execution: one sweep immediately, then one per interval.

use std::sync::Arc;
use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::runner::SweepRunner;

/// Runs an immediate whole-catalog sweep, then registers a repeating sweep
/// every `interval` on a fresh scheduler and starts it.
///
/// The returned handle owns the cadence: keep it alive for as long as the
/// loop should run and call [`JobScheduler::shutdown`] to stop it. Sweeps
/// are awaited inside the job body, so a pass that overruns the interval
/// delays the next tick instead of overlapping it.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the job cannot be registered, or the scheduler fails to start.
pub async fn start(
    runner: Arc<SweepRunner>,
    interval: Duration,
) -> Result<JobScheduler, JobSchedulerError> {
    run_sweep(&runner).await;

    let scheduler = JobScheduler::new().await?;
    let job_runner = Arc::clone(&runner);
    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let runner = Arc::clone(&job_runner);
        Box::pin(async move {
            run_sweep(&runner).await;
        })
    })?;
    scheduler.add(job).await?;
    scheduler.start().await?;
    tracing::info!(interval_secs = interval.as_secs(), "sweep cadence started");
    Ok(scheduler)
}

/// One sweep with errors logged and swallowed, so a bad pass never kills
/// the cadence.
async fn run_sweep(runner: &SweepRunner) {
    tracing::info!("scheduled sweep starting");
    match runner.sweep().await {
        Ok(summaries) => {
            tracing::info!(targets = summaries.len(), "scheduled sweep complete");
        }
        Err(err) => {
            tracing::error!(error = %err, "scheduled sweep failed");
        }
    }
}
