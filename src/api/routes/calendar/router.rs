//! Router for the calendar page

use axum::{Router, extract::State, response::Html, routing::get};
use axum_extra::extract::Query;
use chrono::Utc;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::calendar::resolve_selection;
use crate::web::{Lang, Page, view};

async fn calendar_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::CalendarQuery>,
) -> Result<Html<String>, ApiError> {
    let lang = Lang::from_query(params.lang.as_deref());
    let catalog = state.calendars.catalog();

    let selection = resolve_selection(params.calendar.as_deref(), catalog);
    let events = state
        .calendars
        .calendar_events(&selection, Utc::now())
        .await;

    tracing::debug!(
        lang = %lang,
        calendars = ?selection.calendars,
        events = events.len(),
        "Rendering calendar"
    );

    let data = view::calendar_page(lang, params.calendar.as_deref(), &selection, events, catalog);
    let html = state.templates.render(lang, Page::Calendar, &data)?;
    Ok(Html(html))
}

/// Create the calendar router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(calendar_handler))
}
