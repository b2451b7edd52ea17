use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog::CalendarCatalog;
use super::feed::{FeedClient, RawEvent};
use super::format::{format_duration, format_news_date, parse_feed_timestamp};
use super::selection::Selection;

/// An event ready for rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Event {
    pub summary: String,
    pub description: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub duration: String,
    pub calendar: String,
}

/// Event paired with the instants it is filtered and sorted on.
struct TimedEvent {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    event: Event,
}

fn to_timed_event(raw: RawEvent, calendar: &str) -> TimedEvent {
    let (start, start_display) = parse_feed_timestamp(&raw.start);
    let (end, end_display) = parse_feed_timestamp(&raw.end);

    let duration = match (start, end) {
        (Some(start), Some(end)) => format_duration(end - start),
        _ => String::new(),
    };

    TimedEvent {
        start,
        end,
        event: Event {
            summary: raw.summary,
            description: raw.description,
            start: start_display,
            end: end_display,
            location: raw.location,
            duration,
            calendar: calendar.to_string(),
        },
    }
}

fn is_upcoming(end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    end.is_some_and(|end| end > now)
}

/// Merges the events of several calendars into one chronological
/// listing. Events that ended at or before `now`, or whose end can't
/// be parsed, are dropped. Ties keep feed order.
pub fn build_calendar_listing(
    feeds: Vec<(String, Vec<RawEvent>)>,
    now: DateTime<Utc>,
) -> Vec<Event> {
    let mut timed: Vec<TimedEvent> = feeds
        .into_iter()
        .flat_map(|(calendar, raw_events)| {
            raw_events
                .into_iter()
                .map(move |raw| to_timed_event(raw, &calendar))
        })
        .filter(|e| is_upcoming(e.end, now))
        .collect();

    // `sort_by_key` is stable and `None` orders first like a zero time
    timed.sort_by_key(|e| e.start);

    timed.into_iter().map(|e| e.event).collect()
}

/// Announcements, newest first. There is no end-time filter and the
/// start is shown as `D.M.`.
pub fn build_news_listing(raw_events: Vec<RawEvent>) -> Vec<Event> {
    let mut timed: Vec<TimedEvent> = raw_events
        .into_iter()
        .map(|raw| {
            let (start, _) = parse_feed_timestamp(&raw.start);
            TimedEvent {
                start,
                end: None,
                event: Event {
                    summary: raw.summary,
                    description: raw.description,
                    start: start.as_ref().map(format_news_date).unwrap_or_default(),
                    ..Default::default()
                },
            }
        })
        .collect();

    timed.sort_by(|a, b| b.start.cmp(&a.start));

    timed.into_iter().map(|e| e.event).collect()
}

/// Fetches feeds for the calendar and news pages.
#[derive(Clone, Debug)]
pub struct CalendarService {
    catalog: CalendarCatalog,
    client: FeedClient,
}

impl CalendarService {
    pub fn new(catalog: CalendarCatalog, client: FeedClient) -> Self {
        Self { catalog, client }
    }

    pub fn catalog(&self) -> &CalendarCatalog {
        &self.catalog
    }

    /// Upcoming events of the selected calendars. Feeds are fetched one
    /// after another.
    pub async fn calendar_events(&self, selection: &Selection, now: DateTime<Utc>) -> Vec<Event> {
        let mut feeds = Vec::with_capacity(selection.calendars.len());
        for id in &selection.calendars {
            let Some(source) = self.catalog.get(id) else {
                tracing::error!(calendar = %id, "Calendar not found");
                continue;
            };
            feeds.push((id.clone(), self.client.fetch(source).await));
        }
        build_calendar_listing(feeds, now)
    }

    pub async fn news_events(&self) -> Vec<Event> {
        let raw_events = self.client.fetch(self.catalog.news()).await;
        build_news_listing(raw_events)
    }
}
