//! Render payloads handed to the templates.

use std::collections::BTreeMap;

use serde::Serialize;

use super::lang::Lang;
use crate::calendar::{CalendarCatalog, Event, Selection};
use crate::downloads::DownloadEntry;

#[derive(Debug, Serialize)]
pub struct PageData {
    pub page: &'static str,
    pub lang: Lang,
    pub alternate_lang: Lang,
    pub webcal_urls: BTreeMap<String, String>,
}

pub fn page_data(page: &'static str, lang: Lang, catalog: &CalendarCatalog) -> PageData {
    PageData {
        page,
        lang,
        alternate_lang: lang.other(),
        webcal_urls: catalog.webcal_urls(),
    }
}

#[derive(Debug, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub color: String,
}

/// Toggle button for one calendar on the calendar page.
#[derive(Debug, PartialEq, Serialize)]
pub struct CalendarButton {
    pub id: String,
    pub color: String,
    pub btn_class: String,
    pub webcal_url: String,
    pub active: bool,
    /// URL encoded `calendar` value that flips this calendar in or out
    /// of the current selection
    pub toggle: String,
}

#[derive(Debug, Serialize)]
pub struct CalendarPageData {
    pub page: &'static str,
    pub lang: Lang,
    pub alternate_lang: Lang,
    pub events: Vec<EventView>,
    /// The `calendar` parameter as requested
    pub calendar: String,
    pub calendar_query: String,
    pub calendars: Vec<CalendarButton>,
    pub cal_colors: BTreeMap<String, String>,
    pub cal_btn_classes: BTreeMap<String, String>,
    pub active_cals: BTreeMap<String, bool>,
    pub webcal_urls: BTreeMap<String, String>,
}

pub fn calendar_page(
    lang: Lang,
    param: Option<&str>,
    selection: &Selection,
    events: Vec<Event>,
    catalog: &CalendarCatalog,
) -> CalendarPageData {
    let cal_colors = catalog.colors();

    let events = events
        .into_iter()
        .map(|event| EventView {
            color: cal_colors.get(&event.calendar).cloned().unwrap_or_default(),
            event,
        })
        .collect();

    let calendars = catalog
        .calendars()
        .iter()
        .map(|source| CalendarButton {
            id: source.id.clone(),
            color: source.color.clone(),
            btn_class: source.btn_class.clone(),
            webcal_url: source.url.clone(),
            active: selection.is_active(&source.id),
            toggle: toggle_query(selection, &source.id, catalog),
        })
        .collect();

    let active_cals = selection
        .calendars
        .iter()
        .map(|id| (id.clone(), true))
        .collect();

    let calendar = param.unwrap_or_default().to_string();

    CalendarPageData {
        page: "calendar",
        lang,
        alternate_lang: lang.other(),
        events,
        calendar_query: urlencoding::encode(&calendar).into_owned(),
        calendar,
        calendars,
        cal_colors,
        cal_btn_classes: catalog.btn_classes(),
        active_cals,
        webcal_urls: catalog.webcal_urls(),
    }
}

/// The selection with `id` flipped, in catalog order.
fn toggle_query(selection: &Selection, id: &str, catalog: &CalendarCatalog) -> String {
    let flipped = !selection.is_active(id);
    let ids: Vec<&str> = catalog
        .ids()
        .filter(|other| {
            if *other == id {
                flipped
            } else {
                selection.is_active(other)
            }
        })
        .collect();
    urlencoding::encode(&ids.join(",")).into_owned()
}

#[derive(Debug, Serialize)]
pub struct NewsPageData {
    pub page: &'static str,
    pub lang: Lang,
    pub alternate_lang: Lang,
    pub events: Vec<Event>,
    pub webcal_urls: BTreeMap<String, String>,
}

pub fn news_page(lang: Lang, events: Vec<Event>, catalog: &CalendarCatalog) -> NewsPageData {
    let news = catalog.news();
    NewsPageData {
        page: "news",
        lang,
        alternate_lang: lang.other(),
        events,
        webcal_urls: BTreeMap::from([(news.id.clone(), news.url.clone())]),
    }
}

#[derive(Debug, Serialize)]
pub struct DownloadPageData {
    pub page: &'static str,
    pub lang: Lang,
    pub alternate_lang: Lang,
    pub files: Vec<DownloadEntry>,
}

pub fn download_page(lang: Lang, files: Vec<DownloadEntry>) -> DownloadPageData {
    DownloadPageData {
        page: "download",
        lang,
        alternate_lang: lang.other(),
        files,
    }
}
