//! Page templates using Handlebars. Each language has its own registry
//! built from the templates embedded at compile time.

use std::collections::HashMap;
use std::fmt;

use anyhow::{Context, Result, anyhow};
use handlebars::{Handlebars, handlebars_helper};
use serde::Serialize;

use super::lang::Lang;

// Capitalizes the first character, e.g. calendar ids on buttons
handlebars_helper!(title: |s: String| {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    }
});

const PARTIALS: [&str; 2] = ["header", "footer"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Taichi,
    Impressum,
    News,
    Calendar,
    Download,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Taichi => "taichi",
            Page::Impressum => "impressum",
            Page::News => "news",
            Page::Calendar => "calendar",
            Page::Download => "download",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! embedded {
    ($lang:literal) => {
        [
            ("header", include_str!(concat!("../../templates/", $lang, "/header.hbs"))),
            ("footer", include_str!(concat!("../../templates/", $lang, "/footer.hbs"))),
            ("home", include_str!(concat!("../../templates/", $lang, "/home.hbs"))),
            ("about", include_str!(concat!("../../templates/", $lang, "/about.hbs"))),
            ("taichi", include_str!(concat!("../../templates/", $lang, "/taichi.hbs"))),
            ("impressum", include_str!(concat!("../../templates/", $lang, "/impressum.hbs"))),
            ("news", include_str!(concat!("../../templates/", $lang, "/news.hbs"))),
            ("calendar", include_str!(concat!("../../templates/", $lang, "/calendar.hbs"))),
            ("download", include_str!(concat!("../../templates/", $lang, "/download.hbs"))),
        ]
    };
}

#[derive(Clone, Debug, Default)]
pub struct Templates {
    registries: HashMap<Lang, Handlebars<'static>>,
}

impl Templates {
    /// Registries for every supported language from the embedded
    /// templates.
    pub fn embedded() -> Result<Self> {
        let mut templates = Self::default();
        templates.register(Lang::En, &embedded!("en"))?;
        templates.register(Lang::De, &embedded!("de"))?;
        Ok(templates)
    }

    /// Registers named templates for one language. Names listed in
    /// `PARTIALS` are registered as partials.
    pub fn register(&mut self, lang: Lang, sources: &[(&str, &str)]) -> Result<()> {
        let registry = self.registries.entry(lang).or_insert_with(registry);
        for (name, source) in sources {
            if PARTIALS.contains(name) {
                registry
                    .register_partial(name, *source)
                    .with_context(|| format!("Failed to register partial {lang}/{name}"))?;
            } else {
                registry
                    .register_template_string(name, *source)
                    .with_context(|| format!("Failed to register template {lang}/{name}"))?;
            }
        }
        Ok(())
    }

    pub fn render<T: Serialize>(&self, lang: Lang, page: Page, data: &T) -> Result<String> {
        let registry = self
            .registries
            .get(&lang)
            .ok_or_else(|| anyhow!("Template not found for language {lang}"))?;

        tracing::debug!(lang = %lang, page = %page, "Rendering template");
        registry
            .render(page.name(), data)
            .with_context(|| format!("Failed to render {lang}/{page}"))
    }
}

fn registry() -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_helper("title", Box::new(title));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_renders_embedded_pages_for_every_language() {
        let templates = Templates::embedded().unwrap();
        let data = json!({
            "page": "home",
            "lang": "en",
            "alternate_lang": "de",
            "webcal_urls": {},
        });
        for lang in Lang::ALL {
            for page in [Page::Home, Page::About, Page::Taichi, Page::Impressum] {
                let html = templates.render(lang, page, &data).unwrap();
                assert!(html.contains("</html>"), "{lang}/{page} is incomplete");
            }
        }
    }

    #[test]
    fn it_fails_for_unknown_language() {
        let mut templates = Templates::default();
        templates.register(Lang::En, &[("home", "hi")]).unwrap();

        assert_eq!(templates.render(Lang::En, Page::Home, &json!({})).unwrap(), "hi");
        assert!(templates.render(Lang::De, Page::Home, &json!({})).is_err());
    }

    #[test]
    fn it_fails_for_missing_page() {
        let mut templates = Templates::default();
        templates.register(Lang::En, &[("home", "hi")]).unwrap();
        assert!(templates.render(Lang::En, Page::News, &json!({})).is_err());
    }

    #[test]
    fn it_uses_partials_and_helpers() {
        let mut templates = Templates::default();
        templates
            .register(
                Lang::De,
                &[
                    ("header", "<h1>{{title page}}</h1>"),
                    ("footer", "<footer/>"),
                    ("home", "{{> header}}{{name}}{{> footer}}"),
                ],
            )
            .unwrap();

        let html = templates
            .render(Lang::De, Page::Home, &json!({"page": "start", "name": "<b>"}))
            .unwrap();
        assert_eq!(html, "<h1>Start</h1>&lt;b&gt;<footer/>");
    }
}
