//! IBAN generation, field extraction and verification.
//!
//! All operations are pure functions of their inputs plus a read-only
//! [`CountryRegistry`] reference: no singleton, no hidden global, no
//! caching. Every error is a definite rejection of the input; nothing
//! is retried.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::checksum::{check_digits, mod97};
use crate::error::{IbanError, Result};
use crate::registry::CountryRegistry;

/// Account data for IBAN generation: either the full BBAN as one
/// string, or the individual fields in country order (e.g. bank code,
/// branch code, account number) to be concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountData<'a> {
    /// The complete BBAN in a single string.
    Single(&'a str),
    /// Ordered field substrings, concatenated in the given order.
    Fields(&'a [&'a str]),
}

impl<'a> From<&'a str> for AccountData<'a> {
    fn from(data: &'a str) -> Self {
        Self::Single(data)
    }
}

impl<'a> From<&'a String> for AccountData<'a> {
    fn from(data: &'a String) -> Self {
        Self::Single(data)
    }
}

impl<'a> From<&'a [&'a str]> for AccountData<'a> {
    fn from(data: &'a [&'a str]) -> Self {
        Self::Fields(data)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for AccountData<'a> {
    fn from(data: &'a [&'a str; N]) -> Self {
        Self::Fields(data)
    }
}

impl AccountData<'_> {
    /// Concatenate into one string, strip spaces and uppercase.
    fn normalize(&self) -> String {
        let joined = match self {
            Self::Single(s) => (*s).to_string(),
            Self::Fields(fields) => fields.concat(),
        };
        joined.replace(' ', "").to_ascii_uppercase()
    }
}

/// Named field values extracted from an IBAN, in registry field order.
///
/// The first entry conventionally holds the check digits;
/// country-specific fields follow. Produced fresh on every extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbanFields {
    fields: Vec<(String, String)>,
}

impl IbanFields {
    fn from_pairs(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value of a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in registry field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for IbanFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Whether a country participates in IBAN.
///
/// Pure delegation to the registry's membership test; generation and
/// extraction use it as their precondition gate.
pub fn uses_iban<R>(country: &str, registry: &R) -> bool
where
    R: CountryRegistry + ?Sized,
{
    registry.has_country(country)
}

/// Generate a complete, checksummed IBAN from a country code and
/// unchecked account data.
///
/// The country code is case-insensitive; the account data is
/// concatenated (if given as fields), space-stripped and uppercased
/// before validation against the country's structural pattern.
///
/// # Errors
/// - [`IbanError::UnsupportedCountry`] if the registry does not know
///   the country.
/// - [`IbanError::MalformedAccountData`] if the assembled data does not
///   match the country's pattern (wrong length, character class or
///   field order).
///
/// # Examples
/// ```ignore
/// let iban = generate_iban("GB", &["NWBK", "601613", "31926819"], &registry)?;
/// assert_eq!(iban, "GB29NWBK60161331926819");
/// ```
pub fn generate_iban<'a, R>(
    country: &str,
    data: impl Into<AccountData<'a>>,
    registry: &R,
) -> Result<String>
where
    R: CountryRegistry + ?Sized,
{
    let country = country.to_ascii_uppercase();

    if !registry.has_country(&country) {
        return Err(IbanError::UnsupportedCountry(country));
    }

    let data = data.into().normalize();

    // Candidate with the check-digit placeholder; the pattern covers
    // the placeholder's \d{2} group as well.
    let candidate = format!("{country}00{data}");
    let Some(pattern) = registry.pattern(&country) else {
        return Err(IbanError::UnsupportedCountry(country));
    };
    if !pattern.is_match(&candidate) {
        return Err(IbanError::MalformedAccountData(country));
    }

    let iban = format!("{country}{}{data}", check_digits(&candidate));
    tracing::debug!(country = %country, iban = %iban, "Generated IBAN");
    Ok(iban)
}

/// Parse an existing IBAN into its named fields.
///
/// Spaces are stripped first. The country code is the leading run of
/// ASCII letters before the first digit; the full string is then
/// matched against that country's structural pattern and the capture
/// groups are paired with the registry's field names in order.
///
/// Structural validation only: the check digits are extracted, not
/// verified. Use [`verify_iban`] when the mod-97 invariant must hold.
///
/// # Errors
/// - [`IbanError::InvalidIbanShape`] if there is no leading
///   letter prefix (the input starts with a digit or has no digit).
/// - [`IbanError::UnsupportedCountry`] if the registry does not know
///   the extracted country.
/// - [`IbanError::MalformedIban`] if the string does not match the
///   country's pattern.
pub fn get_fields<R>(iban: &str, registry: &R) -> Result<IbanFields>
where
    R: CountryRegistry + ?Sized,
{
    let iban = iban.replace(' ', "");

    let prefix_len = iban
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if prefix_len == 0 || prefix_len == iban.len() {
        return Err(IbanError::InvalidIbanShape(iban));
    }
    let country = &iban[..prefix_len];

    if !registry.has_country(country) {
        return Err(IbanError::UnsupportedCountry(country.to_string()));
    }

    let (Some(pattern), Some(names)) = (registry.pattern(country), registry.field_names(country))
    else {
        return Err(IbanError::UnsupportedCountry(country.to_string()));
    };
    let Some(captures) = pattern.captures(&iban) else {
        return Err(IbanError::MalformedIban(iban));
    };

    let fields: Vec<(String, String)> = names
        .iter()
        .zip(captures.iter().skip(1))
        .map(|(name, group)| {
            let value = group.map(|m| m.as_str()).unwrap_or_default();
            (name.clone(), value.to_string())
        })
        .collect();

    tracing::debug!(country = %country, fields = fields.len(), "Extracted IBAN fields");
    Ok(IbanFields::from_pairs(fields))
}

/// Parse an IBAN and verify both structure and check digits.
///
/// Structural validation and field extraction as [`get_fields`], plus
/// the mod-97 invariant: the rearranged, letter-expanded IBAN must
/// reduce to remainder 1.
///
/// # Errors
/// Everything [`get_fields`] returns, plus
/// [`IbanError::InvalidCheckDigits`] when the structure is fine but the
/// checksum is not; the error carries the check digits the IBAN should
/// have had.
pub fn verify_iban<R>(iban: &str, registry: &R) -> Result<IbanFields>
where
    R: CountryRegistry + ?Sized,
{
    let fields = get_fields(iban, registry)?;
    let iban = iban.replace(' ', "");

    if mod97(&iban) != 1 {
        // Rebuild the candidate with placeholder check digits to report
        // what they should have been.
        let country_len = iban
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .count();
        let bban: String = fields.iter().skip(1).map(|(_, v)| v).collect();
        let candidate = format!("{}00{bban}", &iban[..country_len]);
        return Err(IbanError::InvalidCheckDigits {
            iban,
            expected: check_digits(&candidate),
        });
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CountryFormat;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    /// Minimal registry covering GB only.
    struct GbRegistry {
        format: CountryFormat,
    }

    impl GbRegistry {
        fn new() -> Self {
            let pattern = Regex::new(r"^GB(\d{2})([A-Z]{4})(\d{6})(\d{8})$").unwrap();
            Self {
                format: CountryFormat::new(
                    pattern,
                    ["check_digits", "bank_code", "sort_code", "account_number"],
                ),
            }
        }
    }

    impl CountryRegistry for GbRegistry {
        fn has_country(&self, country: &str) -> bool {
            country == "GB"
        }

        fn pattern(&self, country: &str) -> Option<&Regex> {
            (country == "GB").then(|| self.format.pattern())
        }

        fn field_names(&self, country: &str) -> Option<&[String]> {
            (country == "GB").then(|| self.format.field_names())
        }
    }

    #[test]
    fn test_generate_iban_from_fields() {
        let registry = GbRegistry::new();
        let iban = generate_iban("GB", &["NWBK", "601613", "31926819"], &registry).unwrap();
        assert_eq!(iban, "GB29NWBK60161331926819");
    }

    #[test]
    fn test_generate_iban_from_single_string() {
        let registry = GbRegistry::new();
        let iban = generate_iban("GB", "NWBK60161331926819", &registry).unwrap();
        assert_eq!(iban, "GB29NWBK60161331926819");
    }

    #[test]
    fn test_generate_iban_normalizes_input() {
        let registry = GbRegistry::new();
        // Lowercase country, lowercase data with embedded spaces.
        let iban = generate_iban("gb", "nwbk 601613 31926819", &registry).unwrap();
        assert_eq!(iban, "GB29NWBK60161331926819");
    }

    #[test]
    fn test_generate_iban_is_deterministic() {
        let registry = GbRegistry::new();
        let a = generate_iban("GB", "NWBK60161331926819", &registry).unwrap();
        let b = generate_iban("GB", "NWBK60161331926819", &registry).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_iban_unsupported_country() {
        let registry = GbRegistry::new();
        assert_eq!(
            generate_iban("XX", "BARC20201630093459", &registry),
            Err(IbanError::UnsupportedCountry("XX".to_string()))
        );
    }

    #[test]
    fn test_generate_iban_malformed_data() {
        let registry = GbRegistry::new();
        // One digit short.
        assert_eq!(
            generate_iban("GB", "BARC2020163003459", &registry),
            Err(IbanError::MalformedAccountData("GB".to_string()))
        );
        // Letter in a digit-only field.
        assert_eq!(
            generate_iban("GB", "BARC20201530093A59", &registry),
            Err(IbanError::MalformedAccountData("GB".to_string()))
        );
        // Letter where the sort code's digits should be.
        assert_eq!(
            generate_iban("GB", "BARCO0201530093459", &registry),
            Err(IbanError::MalformedAccountData("GB".to_string()))
        );
    }

    #[test]
    fn test_generated_iban_satisfies_mod97_invariant() {
        let registry = GbRegistry::new();
        let iban = generate_iban("GB", "NWBK60161331926819", &registry).unwrap();
        assert_eq!(mod97(&iban), 1);
    }

    #[test]
    fn test_get_fields() {
        let registry = GbRegistry::new();
        let fields = get_fields("GB29NWBK60161331926819", &registry).unwrap();

        assert_eq!(fields.len(), 4);
        assert_eq!(fields.get("check_digits"), Some("29"));
        assert_eq!(fields.get("bank_code"), Some("NWBK"));
        assert_eq!(fields.get("sort_code"), Some("601613"));
        assert_eq!(fields.get("account_number"), Some("31926819"));
        assert_eq!(fields.get("bic"), None);
    }

    #[test]
    fn test_get_fields_strips_spaces() {
        let registry = GbRegistry::new();
        let fields = get_fields("GB29 NWBK 6016 1331 9268 19", &registry).unwrap();
        assert_eq!(fields.get("bank_code"), Some("NWBK"));
    }

    #[test]
    fn test_get_fields_preserves_registry_order() {
        let registry = GbRegistry::new();
        let fields = get_fields("GB29NWBK60161331926819", &registry).unwrap();
        let names: Vec<&str> = fields.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            ["check_digits", "bank_code", "sort_code", "account_number"]
        );
    }

    #[test]
    fn test_get_fields_round_trips_generation() {
        let registry = GbRegistry::new();
        let iban = generate_iban("GB", "nwbk 601613 31926819", &registry).unwrap();
        let fields = get_fields(&iban, &registry).unwrap();

        // Concatenating the non-check-digit fields in registry order
        // recovers the normalized input data.
        let bban: String = fields.iter().skip(1).map(|(_, v)| v).collect();
        assert_eq!(bban, "NWBK60161331926819");
    }

    #[test]
    fn test_get_fields_invalid_shape() {
        let registry = GbRegistry::new();
        // Starts with a digit: no leading country code.
        assert_eq!(
            get_fields("12ABCDEF", &registry),
            Err(IbanError::InvalidIbanShape("12ABCDEF".to_string()))
        );
        // No digit at all.
        assert_eq!(
            get_fields("GBNWBK", &registry),
            Err(IbanError::InvalidIbanShape("GBNWBK".to_string()))
        );
        assert_eq!(
            get_fields("", &registry),
            Err(IbanError::InvalidIbanShape(String::new()))
        );
    }

    #[test]
    fn test_get_fields_unsupported_country() {
        let registry = GbRegistry::new();
        assert_eq!(
            get_fields("XX29NWBK60161331926819", &registry),
            Err(IbanError::UnsupportedCountry("XX".to_string()))
        );
    }

    #[test]
    fn test_get_fields_malformed_iban() {
        let registry = GbRegistry::new();
        // Too short for GB.
        assert_eq!(
            get_fields("GB29NWBK6016133192681", &registry),
            Err(IbanError::MalformedIban("GB29NWBK6016133192681".to_string()))
        );
    }

    #[test]
    fn test_verify_iban_accepts_valid() {
        let registry = GbRegistry::new();
        let fields = verify_iban("GB29 NWBK 6016 1331 9268 19", &registry).unwrap();
        assert_eq!(fields.get("check_digits"), Some("29"));
    }

    #[test]
    fn test_verify_iban_rejects_bad_check_digits() {
        let registry = GbRegistry::new();
        assert_eq!(
            verify_iban("GB28NWBK60161331926819", &registry),
            Err(IbanError::InvalidCheckDigits {
                iban: "GB28NWBK60161331926819".to_string(),
                expected: "29".to_string(),
            })
        );
    }

    #[test]
    fn test_uses_iban() {
        let registry = GbRegistry::new();
        assert!(uses_iban("GB", &registry));
        assert!(!uses_iban("XX", &registry));
    }

    #[test]
    fn test_fields_serialize_as_ordered_map() {
        let registry = GbRegistry::new();
        let fields = get_fields("GB29NWBK60161331926819", &registry).unwrap();
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(
            json,
            r#"{"check_digits":"29","bank_code":"NWBK","sort_code":"601613","account_number":"31926819"}"#
        );
    }
}
