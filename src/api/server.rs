use std::sync::Arc;

use anyhow::{Context, Result};
use axum::middleware;
use axum::{Router, extract::Request, response::Response};
use http::{HeaderValue, header};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::api::state::{AppState, SharedState};
use crate::calendar::CalendarCatalog;
use crate::core::AppConfig;
use crate::jobs::{CheckForUpdate, spawn_periodic_job};
use crate::web::Templates;

async fn set_static_cache_control(request: Request, next: middleware::Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

pub fn app(shared_state: SharedState) -> Router {
    let config = &shared_state.config;

    // Images and download files straight from disk
    let static_files = Router::new()
        .nest_service("/api/images", ServeDir::new(&config.images_dir))
        .nest_service("/api/downloads", ServeDir::new(&config.download_files_dir))
        .layer(middleware::from_fn(set_static_cache_control));

    Router::new()
        .merge(routes::router())
        .merge(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::clone(&shared_state))
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    let templates = Templates::embedded()?;
    let app_state = AppState::new(config.clone(), CalendarCatalog::default(), templates);
    let app = app(Arc::new(app_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .with_context(|| format!("Unable to bind {}:{}", host, port))?;

    tracing::info!("Server started at http://{}", listener.local_addr()?);

    // The update check runs in its own task until the process exits
    spawn_periodic_job(config.clone(), CheckForUpdate::from_config(&config));

    axum::serve(listener, app).await?;
    Ok(())
}
