use std::time::Duration;

use async_trait::async_trait;

use super::PeriodicJob;
use crate::core::AppConfig;
use crate::update::{UpdateOutcome, Updater, restart_self};

/// Checks GitHub for a newer release, installs it and restarts.
#[derive(Debug)]
pub struct CheckForUpdate {
    pub interval: Duration,
}

impl CheckForUpdate {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            interval: Duration::from_secs(config.update_interval_secs),
        }
    }
}

#[async_trait]
impl PeriodicJob for CheckForUpdate {
    fn interval(&self) -> Duration {
        self.interval
    }

    async fn run_job(&self, config: &AppConfig) {
        let updater = match Updater::from_config(config) {
            Ok(updater) => updater,
            Err(e) => {
                tracing::error!("Periodic update failed: {:#}", e);
                return;
            }
        };

        match updater.check_and_apply().await {
            Ok(UpdateOutcome::UpToDate) => {}
            Ok(UpdateOutcome::Updated { version }) => {
                tracing::info!(version = %version, "Update applied, restarting");
                if let Err(e) = restart_self() {
                    tracing::error!("Failed to restart after update: {:#}", e);
                }
            }
            Err(e) => tracing::error!("Periodic update failed: {:#}", e),
        }
    }
}
