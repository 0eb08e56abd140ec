//! Error types for IBAN operations.
//!
//! Every variant is a definite rejection of caller input: nothing here
//! is transient or retryable, and no partial result accompanies an
//! error. The offending value is attached so callers can format their
//! own messages.

use thiserror::Error;

/// Main error type for IBAN generation, extraction and verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IbanError {
    /// Country code not recognised as an IBAN-using country.
    #[error("Country {0} does not use IBAN")]
    UnsupportedCountry(String),

    /// During generation, the assembled account data does not match
    /// the target country's structural pattern.
    #[error("Account data not in the correct format for {0}")]
    MalformedAccountData(String),

    /// During extraction, the IBAN does not match its country's
    /// structural pattern (wrong length or character class in a field).
    #[error("IBAN '{0}' does not match the format for its country")]
    MalformedIban(String),

    /// The input has no leading country-code prefix at all, e.g. it
    /// starts with a digit or contains no digit.
    #[error("Input '{0}' has no leading country code")]
    InvalidIbanShape(String),

    /// During verification, the structure is fine but the check digits
    /// do not satisfy the mod-97 invariant.
    #[error("IBAN '{iban}' fails the mod-97 check: check digits should be {expected}")]
    InvalidCheckDigits { iban: String, expected: String },
}

/// Result type alias for IBAN operations.
pub type Result<T> = std::result::Result<T, IbanError>;
