use std::env;

const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 6 * 60 * 60;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub images_dir: String,
    pub downloads_dir: String,
    pub download_files_dir: String,
    pub github_api_url: String,
    pub update_repo_owner: String,
    pub update_repo_name: String,
    pub update_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let images_dir = env::var("YTC_IMAGES_DIR").unwrap_or("static/images".to_string());
        let downloads_dir =
            env::var("YTC_DOWNLOADS_DIR").unwrap_or("static/downloads".to_string());
        // Files are served from the listed directory unless told otherwise
        let download_files_dir =
            env::var("YTC_DOWNLOAD_FILES_DIR").unwrap_or_else(|_| downloads_dir.clone());
        let github_api_url = env::var("YTC_GITHUB_API_URL")
            .unwrap_or_else(|_| "https://api.github.com".to_string());
        let update_repo = env::var("YTC_UPDATE_REPO").unwrap_or("WillyWinkel/ytc".to_string());
        let (update_repo_owner, update_repo_name) = update_repo
            .split_once('/')
            .map(|(owner, name)| (owner.to_string(), name.to_string()))
            .unwrap_or(("WillyWinkel".to_string(), "ytc".to_string()));
        let update_interval_secs =
            update_interval_secs(env::var("YTC_UPDATE_INTERVAL_SECS").ok().as_deref());

        Self {
            images_dir,
            downloads_dir,
            download_files_dir,
            github_api_url,
            update_repo_owner,
            update_repo_name,
            update_interval_secs,
        }
    }
}

// A zero interval would panic in `tokio::time::interval`
fn update_interval_secs(value: Option<&str>) -> u64 {
    value
        .and_then(|secs| secs.trim().parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_UPDATE_INTERVAL_SECS)
}
