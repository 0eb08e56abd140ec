//! Country registry abstraction.
//!
//! Per-country structural rules (pattern plus ordered field names) are
//! declarative data owned by a registry implementation; the core only
//! consumes them through the [`CountryRegistry`] trait and never
//! constructs or caches them itself.

use regex::Regex;

/// Structural format for one country: an anchored pattern over the full
/// IBAN (country code + check digits + BBAN) with one capture group per
/// logical field, and the field names in capture-group order.
///
/// Group 1 conventionally captures the check digits; country-specific
/// fields follow.
#[derive(Debug, Clone)]
pub struct CountryFormat {
    pattern: Regex,
    field_names: Vec<String>,
}

impl CountryFormat {
    /// Create a format from a compiled pattern and its field names.
    ///
    /// # Panics
    /// Debug builds panic if the number of capture groups does not
    /// match the number of field names.
    #[must_use]
    pub fn new(pattern: Regex, field_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let field_names: Vec<String> = field_names.into_iter().map(Into::into).collect();
        debug_assert_eq!(
            pattern.captures_len() - 1,
            field_names.len(),
            "field names must match capture groups of {pattern}",
        );
        Self {
            pattern,
            field_names,
        }
    }

    /// The anchored structural pattern.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Field names in capture-group order.
    #[must_use]
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }
}

/// Lookup interface for per-country IBAN structure.
///
/// Implementations are expected to be immutable after construction and
/// therefore safe for concurrent read access. The contract between the
/// three operations: whenever [`has_country`](Self::has_country)
/// returns `true`, [`pattern`](Self::pattern) and
/// [`field_names`](Self::field_names) return `Some`, the pattern
/// anchor-matches the entire IBAN, and the field-name list matches the
/// pattern's capture groups in length and order.
pub trait CountryRegistry {
    /// Whether the country participates in IBAN.
    fn has_country(&self, country: &str) -> bool;

    /// The country's structural pattern, if it participates.
    fn pattern(&self, country: &str) -> Option<&Regex>;

    /// The country's field names in capture-group order, if it
    /// participates.
    fn field_names(&self, country: &str) -> Option<&[String]>;
}

impl<R: CountryRegistry + ?Sized> CountryRegistry for &R {
    fn has_country(&self, country: &str) -> bool {
        (**self).has_country(country)
    }

    fn pattern(&self, country: &str) -> Option<&Regex> {
        (**self).pattern(country)
    }

    fn field_names(&self, country: &str) -> Option<&[String]> {
        (**self).field_names(country)
    }
}
