//! Background jobs that run on a fixed interval for the lifetime of
//! the server.

mod check_update;

pub use check_update::CheckForUpdate;

use std::time::Duration;

use async_trait::async_trait;

use crate::core::AppConfig;

#[async_trait]
pub trait PeriodicJob: Send + Sync + std::fmt::Debug {
    fn interval(&self) -> Duration;

    async fn run_job(&self, config: &AppConfig);
}

/// Runs `job` in its own tokio task, waiting one interval before each
/// run.
pub fn spawn_periodic_job<J>(config: AppConfig, job: J) -> tokio::task::JoinHandle<()>
where
    J: PeriodicJob + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(job.interval());
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            tracing::debug!("Running periodic job {:?}", job);
            job.run_job(&config).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Debug)]
    struct Counter(Arc<AtomicUsize>);

    #[async_trait]
    impl PeriodicJob for Counter {
        fn interval(&self) -> Duration {
            Duration::from_secs(60)
        }

        async fn run_job(&self, _config: &AppConfig) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn it_waits_an_interval_before_each_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let handle = spawn_periodic_job(AppConfig::default(), Counter(Arc::clone(&runs)));

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(100)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 2);

        handle.abort();
    }
}
