//! Fetch remote iCalendar feeds and pull out the event fields the
//! site displays.

use anyhow::{Context, Result, anyhow, bail};
use icalendar::parser::{Component, read_calendar, unfold};

use super::catalog::CalendarSource;

/// An event as found in the feed, before any date parsing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawEvent {
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: String,
    pub end: String,
}

/// Rewrites `webcal://` (and `webcals://`) subscription links to
/// `https://`. Anything else is returned unchanged.
pub fn https_url(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();

    for scheme in ["webcal://", "webcals://"] {
        if lower.starts_with(scheme) {
            return format!("https://{}", &trimmed[scheme.len()..]);
        }
    }
    trimmed.to_string()
}

/// Parses an ICS document into raw events. Missing properties become
/// empty strings so one sparse event never drops the rest.
pub fn parse_feed(body: &str) -> Result<Vec<RawEvent>> {
    let unfolded = unfold(body);
    let calendar = read_calendar(&unfolded).map_err(|e| anyhow!("Invalid calendar: {e}"))?;

    let mut events = Vec::new();
    collect_events(&calendar.components, &mut events);
    Ok(events)
}

fn collect_events(components: &[Component], events: &mut Vec<RawEvent>) {
    for component in components {
        if component.name == "VEVENT" {
            events.push(to_raw_event(component));
        } else {
            collect_events(&component.components, events);
        }
    }
}

fn to_raw_event(vevent: &Component) -> RawEvent {
    let prop = |name: &str| {
        vevent
            .find_prop(name)
            .map(|p| p.val.to_string())
            .unwrap_or_default()
    };

    RawEvent {
        summary: unescape_text(&prop("SUMMARY")),
        description: unescape_text(&prop("DESCRIPTION")),
        location: unescape_text(&prop("LOCATION")),
        start: prop("DTSTART"),
        end: prop("DTEND"),
    }
}

/// Undo TEXT value escaping (`\n`, `\,`, `\;`, `\\`).
fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// HTTP client for calendar feeds.
#[derive(Clone, Debug, Default)]
pub struct FeedClient {
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetches and parses one calendar. Failures are logged and
    /// produce no events so a broken feed can't take down a page.
    pub async fn fetch(&self, source: &CalendarSource) -> Vec<RawEvent> {
        match self.try_fetch(&source.url).await {
            Ok(events) => {
                tracing::debug!(
                    calendar = %source.id,
                    count = events.len(),
                    "Fetched calendar feed"
                );
                events
            }
            Err(e) => {
                tracing::error!(
                    calendar = %source.id,
                    url = %source.url,
                    "Failed to fetch calendar feed: {:#}",
                    e
                );
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<Vec<RawEvent>> {
        let url = https_url(url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Feed responded with HTTP {status}");
        }

        let body = response.text().await.context("Unable to read feed body")?;
        parse_feed(&body)
    }
}
