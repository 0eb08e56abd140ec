//! IBAN Core - ISO 13616 IBAN validation and generation.
//!
//! This crate provides the algorithmic core for International Bank
//! Account Numbers:
//! - ISO 7064 MOD 97-10 check-digit arithmetic without big integers
//! - IBAN generation from country-specific account data
//! - Field extraction and structural/checksum verification
//!
//! Per-country structural rules (patterns and field names) come from an
//! external [`CountryRegistry`] implementation; every operation takes
//! the registry as an explicit parameter and is otherwise a pure,
//! stateless function. The `iban-registry` crate ships an embedded
//! implementation covering the IBAN-using countries.
//!
//! # Example
//!
//! ```ignore
//! use iban_core::{generate_iban, get_fields};
//!
//! let iban = generate_iban("GB", &["NWBK", "601613", "31926819"], &registry)?;
//! assert_eq!(iban, "GB29NWBK60161331926819");
//!
//! let fields = get_fields(&iban, &registry)?;
//! assert_eq!(fields.get("sort_code"), Some("601613"));
//! ```

pub mod checksum;
pub mod error;
pub mod iban;
pub mod registry;

// Re-export commonly used items
pub use checksum::{check_digits, mod97};
pub use error::{IbanError, Result};
pub use iban::{generate_iban, get_fields, uses_iban, verify_iban, AccountData, IbanFields};
pub use registry::{CountryFormat, CountryRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
