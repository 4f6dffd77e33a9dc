//! Message bundle construction
//!
//! A [`Bundle`] is an immutable lookup table from locale and message id to
//! a message template, built once at process start and passed by reference
//! to consumers. English text lives in the call sites as default messages,
//! so the bundle only carries the translated locales.

use crate::{I18nError, Localizer, Result};
use std::collections::HashMap;
use tracing::warn;

/// Message files embedded at compile time
const EMBEDDED_LOCALES: &[(&str, &str)] = &[
    ("es", include_str!("../locales/es.json")),
    ("ko", include_str!("../locales/ko.json")),
];

/// Immutable locale → (message id → template) table
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    locales: HashMap<String, HashMap<String, String>>,
}

impl Bundle {
    /// Build the bundle from the embedded message files
    ///
    /// A malformed embedded file is skipped with a warning rather than
    /// failing construction; the validity of the shipped files is covered
    /// by a unit test.
    pub fn new() -> Self {
        let mut locales = HashMap::new();

        for &(locale, source) in EMBEDDED_LOCALES {
            match parse_messages(source) {
                Ok(messages) => {
                    locales.insert(locale.to_string(), messages);
                }
                Err(e) => warn!(locale, error = %e, "Skipping malformed message file"),
            }
        }

        Self { locales }
    }

    /// Build a bundle from explicit `(locale, json)` pairs
    pub fn from_locales(sources: &[(&str, &str)]) -> Result<Self> {
        let mut locales = HashMap::new();

        for &(locale, source) in sources {
            let messages =
                parse_messages(source).map_err(|e| I18nError::MessageFileParseFailed {
                    locale: locale.to_string(),
                    detail: e.to_string(),
                })?;
            locales.insert(locale.to_string(), messages);
        }

        Ok(Self { locales })
    }

    /// Look up the template for `id` in `locale`
    pub fn message(&self, locale: &str, id: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|messages| messages.get(id))
            .map(String::as_str)
    }

    /// Locales this bundle carries translations for
    pub fn locales(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    /// Create a localizer bound to `locale`
    pub fn localizer(&self, locale: impl Into<String>) -> Localizer<'_> {
        Localizer::new(self, locale)
    }
}

fn parse_messages(source: &str) -> serde_json::Result<HashMap<String, String>> {
    serde_json::from_str(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_message_files_are_valid() {
        for (locale, source) in EMBEDDED_LOCALES {
            assert!(
                parse_messages(source).is_ok(),
                "embedded message file for '{locale}' is malformed"
            );
        }
    }

    #[test]
    fn test_new_loads_embedded_locales() {
        let bundle = Bundle::new();
        let mut locales = bundle.locales();
        locales.sort_unstable();

        assert_eq!(locales, vec!["es", "ko"]);
    }

    #[test]
    fn test_message_lookup() {
        let bundle = Bundle::new();

        assert_eq!(
            bundle.message("es", "new_conversation"),
            Some("Nueva conversación")
        );
        assert_eq!(bundle.message("es", "missing_id"), None);
        assert_eq!(bundle.message("fr", "new_conversation"), None);
    }

    #[test]
    fn test_from_locales_rejects_malformed_json() {
        let result = Bundle::from_locales(&[("xx", "not json")]);
        assert!(matches!(
            result,
            Err(I18nError::MessageFileParseFailed { locale, .. }) if locale == "xx"
        ));
    }

    #[test]
    fn test_from_locales() {
        let bundle = Bundle::from_locales(&[("fr", r#"{"hello": "Bonjour"}"#)]).unwrap();
        assert_eq!(bundle.message("fr", "hello"), Some("Bonjour"));
    }
}
