use std::collections::BTreeMap;

/// Calendar left out of the default selection.
pub const PRIMARY_CALENDAR: &str = "wochenkurse";

pub const NEWS_CALENDAR: &str = "news";

#[derive(Clone, Debug, PartialEq)]
pub struct CalendarSource {
    pub id: String,
    pub url: String,
    pub color: String,
    pub btn_class: String,
}

impl CalendarSource {
    pub fn new(id: &str, url: &str, color: &str, btn_class: &str) -> Self {
        Self {
            id: id.to_string(),
            url: url.to_string(),
            color: color.to_string(),
            btn_class: btn_class.to_string(),
        }
    }
}

/// The set of calendars the site knows about. Built once at startup
/// and shared read-only by every request.
#[derive(Clone, Debug)]
pub struct CalendarCatalog {
    // Kept in display order
    calendars: Vec<CalendarSource>,
    news: CalendarSource,
}

impl CalendarCatalog {
    pub fn new(calendars: Vec<CalendarSource>, news: CalendarSource) -> Self {
        Self { calendars, news }
    }

    pub fn calendars(&self) -> &[CalendarSource] {
        &self.calendars
    }

    pub fn news(&self) -> &CalendarSource {
        &self.news
    }

    pub fn get(&self, id: &str) -> Option<&CalendarSource> {
        self.calendars.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.calendars.iter().map(|c| c.id.as_str())
    }

    pub fn colors(&self) -> BTreeMap<String, String> {
        self.calendars
            .iter()
            .map(|c| (c.id.clone(), c.color.clone()))
            .collect()
    }

    pub fn btn_classes(&self) -> BTreeMap<String, String> {
        self.calendars
            .iter()
            .map(|c| (c.id.clone(), c.btn_class.clone()))
            .collect()
    }

    pub fn webcal_urls(&self) -> BTreeMap<String, String> {
        self.calendars
            .iter()
            .map(|c| (c.id.clone(), c.url.clone()))
            .collect()
    }
}

impl Default for CalendarCatalog {
    fn default() -> Self {
        let published = "webcal://p177-caldav.icloud.com/published/2/NTY2NDAwNzQ4NTY2NDAwN-KlgK_xXpw8BNa9QCZzsf";
        let calendars = vec![
            CalendarSource::new(
                PRIMARY_CALENDAR,
                &format!("{published}xreWnKQdW0FFtX6payfjYjJTJFZe4xHvR0bHx3C2wBYAq2682Ughg9wGEjVii8uEs"),
                "#0d6efd",
                "primary",
            ),
            CalendarSource::new(
                "sonderkurse",
                &format!("{published}wnZeAR3LQOhWWLb268k4gqa1jhmgoL-XsvLo6wcVXyHeG_di75FEtbP2difn6tV9Y"),
                "#198754",
                "success",
            ),
            CalendarSource::new(
                "schnupperstunden",
                &format!("{published}zT5ZB2ZS9ej1khBvIrOwaOx_Yvn3-WSwh8yMj25fiiKNXTMWQ-y4HQBcjnTGJClXc"),
                "#ffc107",
                "warning",
            ),
            CalendarSource::new(
                "ferienkurse",
                &format!("{published}w0uWa7nlulHIUfnj6U_loZyYiyTZZaOUxNS2s5lrWQCZTmfIe5Zl__8qw2ZWC1-g0"),
                "#dc3545",
                "danger",
            ),
        ];
        let news = CalendarSource::new(
            NEWS_CALENDAR,
            &format!("{published}ymY060CQ5jlmHwPXxtPa5_JOMNfAPXj82_RGF37kIDBcpYXjSkbDii8EnPXk_IVgY"),
            "#6c757d",
            "secondary",
        );
        Self::new(calendars, news)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keeps_display_order() {
        let catalog = CalendarCatalog::default();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(
            ids,
            vec!["wochenkurse", "sonderkurse", "schnupperstunden", "ferienkurse"]
        );
        assert!(catalog.get("news").is_none());
        assert_eq!(catalog.news().id, "news");
    }

    #[test]
    fn it_uses_webcal_urls() {
        let catalog = CalendarCatalog::default();
        assert!(catalog.calendars().iter().all(|c| c.url.starts_with("webcal://")));
        assert_eq!(catalog.colors()["ferienkurse"], "#dc3545");
        assert_eq!(catalog.btn_classes()["sonderkurse"], "success");
    }
}
