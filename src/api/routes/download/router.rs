//! Router for the download page

use std::path::PathBuf;

use anyhow::Context;
use axum::{Router, extract::State, response::Html, routing::get};
use axum_extra::extract::Query;

use crate::api::public::ApiError;
use crate::api::public::pages::LangQuery;
use crate::api::state::SharedState;
use crate::downloads::{DOWNLOADS_URL_PREFIX, scan_downloads};
use crate::web::{Lang, Page, view};

async fn download_handler(
    State(state): State<SharedState>,
    Query(params): Query<LangQuery>,
) -> Result<Html<String>, ApiError> {
    let lang = Lang::from_query(params.lang.as_deref());

    let dir = PathBuf::from(&state.config.downloads_dir);
    let files = tokio::task::spawn_blocking(move || scan_downloads(&dir, DOWNLOADS_URL_PREFIX))
        .await?
        .context("Download directory not found")?;

    tracing::info!(lang = %lang, count = files.len(), "Rendering download page");

    let data = view::download_page(lang, files);
    let html = state.templates.render(lang, Page::Download, &data)?;
    Ok(Html(html))
}

/// Create the download router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(download_handler))
}
