//! Localized string tables for the listing page

use std::collections::HashMap;

use crate::error::{AppError, AppResult};

/// Tables compiled into the binary, keyed by locale code
const EMBEDDED_TABLES: &[(&str, &str)] = &[
    ("en", include_str!("../../resources/i18n/en.json")),
    ("fr", include_str!("../../resources/i18n/fr.json")),
    ("de", include_str!("../../resources/i18n/de.json")),
    ("ru", include_str!("../../resources/i18n/ru.json")),
];

/// Keys the listing page looks up
pub mod keys {
    pub const HEADER: &str = "header";
    pub const LIST: &str = "list";
    pub const TITLE: &str = "title";
    pub const ALBUM: &str = "album";
    pub const YEAR: &str = "year";
    pub const ARTIST: &str = "artist";
    pub const GENRE: &str = "genre";
    pub const PLAY: &str = "play";
    pub const VISIT_DATE: &str = "visit_date";
    pub const VISIT_COUNT: &str = "visit_count";
}

type Table = HashMap<String, String>;

/// Key -> message lookup per locale with default-locale fallback
#[derive(Debug, Clone)]
pub struct ResourceBundle {
    default_locale: String,
    tables: HashMap<String, Table>,
}

impl ResourceBundle {
    /// Bundle built from the embedded tables
    pub fn embedded(default_locale: &str) -> AppResult<Self> {
        let mut tables = HashMap::new();
        for (locale, raw) in EMBEDDED_TABLES {
            let table: Table = serde_json::from_str(raw).map_err(|e| {
                AppError::Internal(format!("Invalid message table for '{}': {}", locale, e))
            })?;
            tables.insert((*locale).to_string(), table);
        }
        Ok(Self::from_tables(default_locale, tables))
    }

    pub fn from_tables(default_locale: &str, tables: HashMap<String, Table>) -> Self {
        Self {
            default_locale: normalize(default_locale),
            tables,
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Look up `key` for `locale`.
    ///
    /// Tries the exact locale, then its language part (`fr_CA` -> `fr`), then the
    /// default locale. A key missing everywhere resolves to itself.
    pub fn get<'a>(&'a self, key: &'a str, locale: &str) -> &'a str {
        self.candidates(locale)
            .iter()
            .filter_map(|candidate| self.tables.get(candidate))
            .find_map(|table| table.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Look up `key` and substitute `arg` into its first `{}` placeholder
    pub fn format(&self, key: &str, locale: &str, arg: impl std::fmt::Display) -> String {
        let template = self.get(key, locale);
        match template.split_once("{}") {
            Some((before, after)) => format!("{}{}{}", before, arg, after),
            None => template.to_string(),
        }
    }

    fn candidates(&self, locale: &str) -> Vec<String> {
        let exact = normalize(locale);
        let language = exact.split_once('_').map(|(language, _)| language.to_string());

        let mut candidates = Vec::with_capacity(3);
        candidates.push(exact);
        candidates.extend(language);
        if !candidates.contains(&self.default_locale) {
            candidates.push(self.default_locale.clone());
        }
        candidates
    }
}

/// `fr-CA` and `FR_ca` both become `fr_ca`
fn normalize(locale: &str) -> String {
    locale.trim().replace('-', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> ResourceBundle {
        ResourceBundle::embedded("en").unwrap()
    }

    #[test]
    fn test_embedded_tables_have_every_page_key() {
        let bundle = bundle();
        let required = [
            keys::HEADER,
            keys::LIST,
            keys::TITLE,
            keys::ALBUM,
            keys::YEAR,
            keys::ARTIST,
            keys::GENRE,
            keys::PLAY,
            keys::VISIT_DATE,
            keys::VISIT_COUNT,
        ];
        for locale in ["en", "fr", "de", "ru"] {
            let table = &bundle.tables[locale];
            for key in required {
                assert!(table.contains_key(key), "{} missing in {}", key, locale);
            }
        }
    }

    #[test]
    fn test_get_exact_locale() {
        assert_eq!(bundle().get(keys::TITLE, "fr"), "Titre");
    }

    #[test]
    fn test_region_falls_back_to_language() {
        assert_eq!(bundle().get(keys::TITLE, "de-AT"), "Titel");
        assert_eq!(bundle().get(keys::TITLE, "FR_ca"), "Titre");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_default() {
        assert_eq!(bundle().get(keys::TITLE, "xx"), "Title");
        assert_eq!(bundle().get(keys::TITLE, ""), "Title");
    }

    #[test]
    fn test_missing_key_falls_back_to_default_then_key() {
        let mut tables = HashMap::new();
        tables.insert("en".to_string(), Table::from([("play".to_string(), "Play".to_string())]));
        tables.insert("fr".to_string(), Table::new());
        let bundle = ResourceBundle::from_tables("en", tables);

        assert_eq!(bundle.get("play", "fr"), "Play");
        assert_eq!(bundle.get("nope", "fr"), "nope");
    }

    #[test]
    fn test_format_substitutes_placeholder() {
        assert_eq!(
            bundle().format(keys::VISIT_COUNT, "en", 3),
            "Number of visits: 3"
        );
    }

    #[test]
    fn test_format_without_placeholder_returns_template() {
        assert_eq!(bundle().format(keys::TITLE, "en", 3), "Title");
    }
}
