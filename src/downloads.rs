//! Download listing built from a directory of files with optional
//! `.info` sidecars holding a description.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub const DOWNLOADS_URL_PREFIX: &str = "/api/downloads/";

const INFO_EXTENSION: &str = "info";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DownloadEntry {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Lists the files in `dir`. A sidecar `<base>.info` next to
/// `<base>.<ext>` supplies the description, otherwise the file name is
/// used. Failing to read the directory is an error.
pub fn scan_downloads(dir: &Path, url_prefix: &str) -> Result<Vec<DownloadEntry>> {
    tracing::info!(dir = %dir.display(), "Scanning downloads directory");

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Unable to read downloads directory {}", dir.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let sidecars: HashMap<&str, &str> = names
        .iter()
        .filter(|name| extension(name) == Some(INFO_EXTENSION))
        .map(|name| (base_name(name), name.as_str()))
        .collect();

    let mut downloads = Vec::new();
    for name in names.iter().filter(|name| extension(name) != Some(INFO_EXTENSION)) {
        let description = match sidecars.get(base_name(name)) {
            Some(info) => match fs::read_to_string(dir.join(info)) {
                Ok(content) => content.trim().to_string(),
                Err(e) => {
                    tracing::warn!(info = %info, "Could not read description file: {}", e);
                    name.clone()
                }
            },
            None => name.clone(),
        };

        tracing::debug!(file = %name, description = %description, "Prepared download file");
        downloads.push(DownloadEntry {
            name: name.clone(),
            url: format!("{url_prefix}{name}"),
            description,
        });
    }

    tracing::info!(count = downloads.len(), "Completed scanning downloads");
    Ok(downloads)
}

// Everything after the last dot, so a bare `.info` counts as a sidecar
fn extension(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

fn base_name(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(base, _)| base)
}
