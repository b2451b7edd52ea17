//! Public types for the calendar page
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub lang: Option<String>,
    /// Comma separated calendar ids
    pub calendar: Option<String>,
}
