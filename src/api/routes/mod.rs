//! Page routes

pub mod calendar;
pub mod download;
pub mod news;
pub mod pages;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined router for every page
pub fn router() -> Router<SharedState> {
    Router::new()
        // Language pages (home, about, ...)
        .merge(pages::router())
        // Merged listing of the selected calendars
        .nest("/calendar", calendar::router())
        // Announcements
        .nest("/news", news::router())
        // Files with descriptions
        .nest("/download", download::router())
}
