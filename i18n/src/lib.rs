//! Localized string lookup for picstash.
//!
//! The dictionaries are embedded TOML tables, one per language. `lookup`
//! resolves dotted keys (`"gallery.attachError"`) and falls back to the key
//! itself when a translation is missing, so forgotten entries show up in the
//! UI instead of rendering blank.

use once_cell::sync::Lazy;

static EN: Lazy<toml::Value> = Lazy::new(|| {
    include_str!("../locales/en.toml")
        .parse()
        .expect("embedded en locale is valid TOML")
});

static RU: Lazy<toml::Value> = Lazy::new(|| {
    include_str!("../locales/ru.toml")
        .parse()
        .expect("embedded ru locale is valid TOML")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ru,
}

impl Lang {
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }
}

pub fn lookup(lang: Lang, key: &str) -> String {
    let table = match lang {
        Lang::En => &*EN,
        Lang::Ru => &*RU,
    };
    let mut current = table;
    for part in key.split('.') {
        match current.get(part) {
            Some(value) => current = value,
            None => return key.to_string(),
        }
    }
    current
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}
