//! Deterministic identifier generation for Asset Administration Shell models.
//!
//! Every entity written into an AAS document (shells, assets, submodels, concept descriptions)
//! needs a globally referenceable identifier. The converter only knows human-readable short names
//! taken from the spreadsheet, so this crate derives identifiers from those names.
//!
//! This crate provides:
//! - The [`IdentifierProvider`] capability set shared by both identifier schemes.
//! - [`IriProvider`]: identifiers below a configured base IRI, with digit bodies that are either
//!   derived from a hash ([`DigitMode::DeterministicHash`]) or drawn from the OS random source
//!   ([`DigitMode::RandomSecure`]).
//! - [`UrnUuidProvider`]: `urn:uuid:` identifiers derived entirely from a hash.
//! - [`ProviderFactory`]: the single entry point that picks a provider from configuration.
//!
//! ## Guarantees (per provider instance)
//! - **Idempotence**: the same seed always maps to the same identifier.
//! - **Uniqueness**: two distinct seeds never map to the same identifier.
//! - **Determinism**: in hash mode, two fresh providers fed the same calls return the same
//!   identifiers.
//!
//! Nothing is persisted. The allocation ledger lives and dies with its provider, so uniqueness
//! holds within one conversion run only.
//!
//! ## Identifier formats
//!
//! | Entity              | IRI scheme                                   | UUID scheme            |
//! |---------------------|----------------------------------------------|------------------------|
//! | Asset               | `<base>/asset/dddd_dddd_dddd_dddd`           | `urn:uuid:8-4-4-4-12`  |
//! | Submodel            | `<base>/sm/dddd_dddd_dddd_dddd`              | `urn:uuid:8-4-4-4-12`  |
//! | Shell               | `AssetAdministrationShell---<hex8>`          | `urn:uuid:8-4-4-4-12`  |
//! | Concept description | `ConceptDescription---<hex8>`                | `urn:uuid:8-4-4-4-12`  |
//!
//! ## Example
//!
//! ```
//! use aasx_ident::{DigitMode, IdScheme, ProviderFactory};
//!
//! let mut provider = ProviderFactory::create(
//!     IdScheme::Iri,
//!     "https://example.com/plant",
//!     DigitMode::DeterministicHash,
//! );
//! let shell = provider.shell_id("Motor1");
//! assert!(shell.starts_with("AssetAdministrationShell---"));
//! assert_eq!(provider.shell_id("Motor1"), shell);
//! ```

mod digest;
mod extract;
mod factory;
mod iri;
mod ledger;
mod provider;
mod scheme;
mod shared;
mod urn;

pub use digest::{SeedDigest, Sha256Digest, DIGEST_LEN};
pub use extract::{decimal_digits, group_digits, hex_prefix, random_digits};
pub use factory::ProviderFactory;
pub use iri::{IriProvider, DEFAULT_BASE_IRI};
pub use ledger::AllocationLedger;
pub use provider::{EntityKind, IdentifierProvider};
pub use scheme::{DigitMode, IdScheme};
pub use shared::SharedProvider;
pub use urn::UrnUuidProvider;

/// Error type for identifier configuration.
///
/// Derivation itself never fails; only parsing configuration values can.
#[derive(Debug, thiserror::Error)]
pub enum IdentError {
    /// Digit mode string is not one of the recognised values
    #[error("unknown digit mode: '{0}' (expected 'deterministic' or 'random')")]
    UnknownDigitMode(String),
    /// Identifier scheme string is not one of the recognised values
    #[error("unknown identifier scheme: '{0}' (expected 'iri' or 'uuid')")]
    UnknownScheme(String),
}

/// Result type for identifier configuration.
pub type IdentResult<T> = Result<T, IdentError>;
