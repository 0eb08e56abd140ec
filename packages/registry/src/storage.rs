//! Embedded country registry.
//!
//! Compiles the declarative country table into [`CountryFormat`]s once
//! at construction and serves lookups through the [`CountryRegistry`]
//! trait. Immutable afterwards, so concurrent reads need no locking.

use std::collections::HashMap;

use iban_core::{CountryFormat, CountryRegistry};
use regex::Regex;

use crate::data::COUNTRY_SPECS;

/// Registry of per-country IBAN structures for all IBAN-using
/// countries.
#[derive(Debug, Clone)]
pub struct IbanStorage {
    formats: HashMap<&'static str, CountryFormat>,
}

impl IbanStorage {
    /// Compile the embedded country table.
    #[must_use]
    pub fn new() -> Self {
        let formats: HashMap<&'static str, CountryFormat> = COUNTRY_SPECS
            .iter()
            .map(|&(code, pattern, fields)| {
                #[allow(clippy::expect_used)] // Static patterns, exercised by tests
                let regex = Regex::new(pattern).expect("valid country pattern");
                (code, CountryFormat::new(regex, fields.iter().copied()))
            })
            .collect();

        tracing::debug!(countries = formats.len(), "Compiled IBAN country formats");
        Self { formats }
    }

    /// Country codes in the registry, in no particular order.
    pub fn countries(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formats.keys().copied()
    }

    /// Number of countries in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for IbanStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryRegistry for IbanStorage {
    fn has_country(&self, country: &str) -> bool {
        self.formats.contains_key(country)
    }

    fn pattern(&self, country: &str) -> Option<&Regex> {
        self.formats.get(country).map(CountryFormat::pattern)
    }

    fn field_names(&self, country: &str) -> Option<&[String]> {
        self.formats.get(country).map(CountryFormat::field_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_country() {
        let storage = IbanStorage::new();
        assert!(storage.has_country("GB"));
        assert!(storage.has_country("DE"));
        assert!(storage.has_country("XK"));
    }

    #[test]
    fn test_does_not_have_country() {
        let storage = IbanStorage::new();
        assert!(!storage.has_country("XX")); // non-existent code
        assert!(!storage.has_country("GBR")); // alpha-3 code
        assert!(!storage.has_country("G")); // too short
        assert!(!storage.has_country("12")); // number string
        assert!(!storage.has_country("gb")); // lookups are case-sensitive
    }

    #[test]
    fn test_len() {
        let storage = IbanStorage::new();
        assert_eq!(storage.len(), 70);
        assert!(!storage.is_empty());
    }

    #[test]
    fn test_patterns_anchor_match_whole_iban() {
        let storage = IbanStorage::new();
        let pattern = storage.pattern("GB").unwrap();
        assert!(pattern.is_match("GB29NWBK60161331926819"));
        // Anchors reject embedded matches.
        assert!(!pattern.is_match("XGB29NWBK60161331926819"));
        assert!(!pattern.is_match("GB29NWBK601613319268190"));
    }

    #[test]
    fn test_field_names_match_capture_groups_for_every_country() {
        let storage = IbanStorage::new();
        for country in storage.countries() {
            let pattern = storage.pattern(country).unwrap();
            let names = storage.field_names(country).unwrap();
            assert_eq!(
                pattern.captures_len() - 1,
                names.len(),
                "group/field mismatch for {country}"
            );
        }
    }

    #[test]
    fn test_unknown_country_has_no_format() {
        let storage = IbanStorage::new();
        assert!(storage.pattern("XX").is_none());
        assert!(storage.field_names("XX").is_none());
    }
}
