//! IBAN country registry - embedded ISO 13616 structures.
//!
//! This crate provides [`IbanStorage`], a ready-made
//! [`CountryRegistry`](iban_core::CountryRegistry) implementation
//! covering the IBAN-using countries, plus the `iban` command-line
//! tool built on it.
//!
//! # Example
//!
//! ```
//! use iban_core::{generate_iban, get_fields};
//! use iban_registry::IbanStorage;
//!
//! let registry = IbanStorage::new();
//!
//! let iban = generate_iban("GB", &["NWBK", "601613", "31926819"], &registry)?;
//! assert_eq!(iban, "GB29NWBK60161331926819");
//!
//! let fields = get_fields(&iban, &registry)?;
//! assert_eq!(fields.get("sort_code"), Some("601613"));
//! # Ok::<(), iban_core::IbanError>(())
//! ```

pub mod cli;
mod data;
pub mod storage;

pub use storage::IbanStorage;
