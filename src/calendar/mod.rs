//! Calendar feeds: configuration, fetching, parsing and the listings
//! built from them.

pub mod catalog;
pub mod feed;
pub mod format;
pub mod listing;
pub mod selection;

pub use catalog::{CalendarCatalog, CalendarSource, NEWS_CALENDAR, PRIMARY_CALENDAR};
pub use feed::{FeedClient, RawEvent};
pub use listing::{CalendarService, Event, build_calendar_listing, build_news_listing};
pub use selection::{Selection, resolve_selection};
