//! Router for the news page

use axum::{Router, extract::State, response::Html, routing::get};
use axum_extra::extract::Query;

use crate::api::public::ApiError;
use crate::api::public::pages::LangQuery;
use crate::api::state::SharedState;
use crate::web::{Lang, Page, view};

async fn news_handler(
    State(state): State<SharedState>,
    Query(params): Query<LangQuery>,
) -> Result<Html<String>, ApiError> {
    let lang = Lang::from_query(params.lang.as_deref());
    let events = state.calendars.news_events().await;

    tracing::debug!(lang = %lang, events = events.len(), "Rendering news");

    let data = view::news_page(lang, events, state.calendars.catalog());
    let html = state.templates.render(lang, Page::News, &data)?;
    Ok(Html(html))
}

/// Create the news router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(news_handler))
}
