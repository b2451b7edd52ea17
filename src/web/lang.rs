use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    #[default]
    De,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::De];

    /// Resolves the `lang` query value, falling back to German for
    /// anything unsupported.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("en") => Lang::En,
            Some("de") => Lang::De,
            _ => Lang::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
        }
    }

    /// The language offered by the switcher.
    pub fn other(&self) -> Self {
        match self {
            Lang::En => Lang::De,
            Lang::De => Lang::En,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
