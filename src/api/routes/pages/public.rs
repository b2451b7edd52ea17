//! Public types shared by the page routes
use serde::Deserialize;

/// Every page accepts `?lang=`. Unsupported values fall back to the
/// default language instead of being rejected.
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}
