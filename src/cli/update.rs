use anyhow::Result;

use crate::core::AppConfig;
use crate::update::{UpdateOutcome, Updater};

/// Runs a single update check. Unlike the background job this does not
/// restart anything, the new binary is used on the next start.
pub async fn run(config: &AppConfig) -> Result<()> {
    let updater = Updater::from_config(config)?;
    match updater.check_and_apply().await? {
        UpdateOutcome::Updated { version } => {
            tracing::info!(version = %version, "Updated");
            println!("Update successful.");
        }
        UpdateOutcome::UpToDate => println!("Already up to date."),
    }
    Ok(())
}
