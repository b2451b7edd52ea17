//! Router for the static language pages

use axum::{Router, extract::State, response::Html, routing::get};
use axum_extra::extract::Query;

use super::public::LangQuery;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::web::{Lang, Page, view};

fn render_page(state: &SharedState, page: Page, params: &LangQuery) -> Result<Html<String>, ApiError> {
    let lang = Lang::from_query(params.lang.as_deref());
    let data = view::page_data(page.name(), lang, state.calendars.catalog());
    let html = state.templates.render(lang, page, &data)?;
    Ok(Html(html))
}

async fn home(
    State(state): State<SharedState>,
    Query(params): Query<LangQuery>,
) -> Result<Html<String>, ApiError> {
    render_page(&state, Page::Home, &params)
}

async fn about(
    State(state): State<SharedState>,
    Query(params): Query<LangQuery>,
) -> Result<Html<String>, ApiError> {
    render_page(&state, Page::About, &params)
}

async fn taichi(
    State(state): State<SharedState>,
    Query(params): Query<LangQuery>,
) -> Result<Html<String>, ApiError> {
    render_page(&state, Page::Taichi, &params)
}

async fn impressum(
    State(state): State<SharedState>,
    Query(params): Query<LangQuery>,
) -> Result<Html<String>, ApiError> {
    render_page(&state, Page::Impressum, &params)
}

/// Create the pages router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(home))
        .route("/home", get(home))
        .route("/about", get(about))
        .route("/taichi", get(taichi))
        .route("/impressum", get(impressum))
}
