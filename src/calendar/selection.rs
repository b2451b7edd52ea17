use std::collections::HashSet;

use itertools::Itertools;

use super::catalog::{CalendarCatalog, PRIMARY_CALENDAR};

/// Calendars chosen for one request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    pub calendars: Vec<String>,
    pub active: HashSet<String>,
}

impl Selection {
    fn from_ids(calendars: Vec<String>) -> Self {
        let active = calendars.iter().cloned().collect();
        Self { calendars, active }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }
}

/// Splits a comma separated list, trimming each part and dropping
/// empty ones.
pub fn split_and_trim(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Resolves the `calendar` query parameter against the catalog.
///
/// An absent or empty parameter selects every calendar except the
/// primary one, sorted by id. Any other value is filtered: unknown ids
/// and blank parts are dropped and the rest keep request order, which
/// can leave the selection empty.
pub fn resolve_selection(param: Option<&str>, catalog: &CalendarCatalog) -> Selection {
    let Some(param) = param.filter(|p| !p.is_empty()) else {
        return default_selection(catalog);
    };

    let calendars = split_and_trim(param)
        .into_iter()
        .filter(|id| catalog.contains(id))
        .unique()
        .collect();
    Selection::from_ids(calendars)
}

fn default_selection(catalog: &CalendarCatalog) -> Selection {
    let calendars = catalog
        .ids()
        .filter(|id| *id != PRIMARY_CALENDAR)
        .sorted()
        .map(String::from)
        .collect();
    Selection::from_ids(calendars)
}
