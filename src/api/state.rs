use std::sync::Arc;

use crate::calendar::{CalendarCatalog, CalendarService, FeedClient};
use crate::core::AppConfig;
use crate::web::Templates;

pub type SharedState = Arc<AppState>;

/// Everything a request needs. Built once at startup and never
/// mutated afterwards.
pub struct AppState {
    pub config: AppConfig,
    pub calendars: CalendarService,
    pub templates: Templates,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: CalendarCatalog, templates: Templates) -> Self {
        Self {
            config,
            calendars: CalendarService::new(catalog, FeedClient::default()),
            templates,
        }
    }
}
