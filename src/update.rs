//! Self-update from GitHub releases.
//!
//! The running binary is backed up next to itself as `<exe>.bak`
//! before it is replaced. If writing the new binary fails the backup
//! is copied back and the old version keeps running.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use tokio::fs;

use crate::core::AppConfig;

pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

const BINARY_PREFIX: &str = "ytc-server";

#[derive(Debug, PartialEq)]
pub enum UpdateOutcome {
    UpToDate,
    Updated { version: String },
}

#[derive(Deserialize)]
struct GitHubRelease {
    tag_name: String,
    assets: Vec<GitHubAsset>,
}

#[derive(Deserialize)]
struct GitHubAsset {
    name: String,
    browser_download_url: String,
}

/// Release asset name for this platform, using Go style architecture
/// names to match the published artifacts.
pub fn binary_name() -> String {
    let arch = match env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "arm" => "arm",
        other => other,
    };
    match env::consts::OS {
        "linux" => format!("{BINARY_PREFIX}-linux-{arch}"),
        "windows" => format!("{BINARY_PREFIX}-windows-{arch}.exe"),
        "macos" => format!("{BINARY_PREFIX}-darwin-{arch}"),
        _ => BINARY_PREFIX.to_string(),
    }
}

fn same_version(a: &str, b: &str) -> bool {
    a.trim_start_matches('v') == b.trim_start_matches('v')
}

#[derive(Clone, Debug)]
pub struct Updater {
    client: reqwest::Client,
    api_base_url: String,
    repo_owner: String,
    repo_name: String,
    current_version: String,
    target_path: PathBuf,
    asset_name: String,
}

impl Updater {
    pub fn new(
        api_base_url: &str,
        repo_owner: &str,
        repo_name: &str,
        current_version: &str,
        target_path: PathBuf,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("{BINARY_PREFIX}/{CURRENT_VERSION}"))
            .build()?;

        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            repo_owner: repo_owner.to_string(),
            repo_name: repo_name.to_string(),
            current_version: current_version.to_string(),
            target_path,
            asset_name: binary_name(),
        })
    }

    /// Updater for the running executable.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let exe = env::current_exe().context("Could not determine executable path")?;
        Self::new(
            &config.github_api_url,
            &config.update_repo_owner,
            &config.update_repo_name,
            CURRENT_VERSION,
            exe,
        )
    }

    pub fn with_asset_name(mut self, asset_name: &str) -> Self {
        self.asset_name = asset_name.to_string();
        self
    }

    /// Installs the latest release if it differs from the running
    /// version. Safe to call repeatedly.
    pub async fn check_and_apply(&self) -> Result<UpdateOutcome> {
        let release = self.fetch_latest_release().await?;

        let download_url = release
            .assets
            .iter()
            .find(|asset| asset.name == self.asset_name)
            .map(|asset| asset.browser_download_url.clone())
            .ok_or_else(|| anyhow!("No suitable binary found in release {}", release.tag_name))?;

        let latest = release.tag_name;
        if latest.is_empty() || same_version(&latest, &self.current_version) {
            tracing::debug!(version = %self.current_version, "Already up to date");
            return Ok(UpdateOutcome::UpToDate);
        }

        tracing::info!(version = %latest, "Updating to new version");
        let bytes = self.download(&download_url).await?;

        let backup = backup_binary(&self.target_path).await?;
        if let Err(e) = replace_binary(&self.target_path, &bytes).await {
            if let Err(restore_err) = restore_backup(&backup, &self.target_path).await {
                tracing::error!("Failed to restore backup binary: {:#}", restore_err);
            }
            bail!("update failed, rolled back: {:#}", e);
        }

        tracing::info!(version = %latest, "Update applied");
        Ok(UpdateOutcome::Updated { version: latest })
    }

    async fn fetch_latest_release(&self) -> Result<GitHubRelease> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_base_url, self.repo_owner, self.repo_name
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            bail!(
                "Failed to check for updates (HTTP {}). GitHub API may be rate-limited.",
                response.status()
            );
        }

        let body = response.bytes().await?;
        let release: GitHubRelease = serde_json::from_slice(&body)?;
        Ok(release)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            bail!("Download failed (HTTP {})", response.status());
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            bail!("Downloaded binary is empty");
        }
        Ok(bytes.to_vec())
    }
}

fn backup_path(target: &Path) -> PathBuf {
    let mut path = target.as_os_str().to_owned();
    path.push(".bak");
    PathBuf::from(path)
}

/// Copies `target` to `<target>.bak`.
pub async fn backup_binary(target: &Path) -> Result<PathBuf> {
    let backup = backup_path(target);
    fs::copy(target, &backup)
        .await
        .with_context(|| format!("Failed to back up {}", target.display()))?;
    Ok(backup)
}

/// Writes `bytes` over `target` and makes it executable.
pub async fn replace_binary(target: &Path, bytes: &[u8]) -> Result<()> {
    // Unlink first. Writing into a running executable fails with
    // ETXTBSY on Linux, while the old inode stays mapped after unlink.
    if fs::try_exists(target).await? {
        fs::remove_file(target).await?;
    }
    fs::write(target, bytes).await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(target, std::fs::Permissions::from_mode(0o755)).await?;
    }
    Ok(())
}

pub async fn restore_backup(backup: &Path, target: &Path) -> Result<()> {
    let bytes = fs::read(backup)
        .await
        .with_context(|| format!("Failed to read backup {}", backup.display()))?;
    replace_binary(target, &bytes).await
}

/// Starts a fresh copy of the current executable with the same
/// arguments and exits.
pub fn restart_self() -> Result<()> {
    let exe = env::current_exe()?;
    tracing::info!(exe = %exe.display(), "Restarting");
    std::process::Command::new(exe)
        .args(env::args_os().skip(1))
        .spawn()
        .context("Failed to restart")?;
    std::process::exit(0);
}
