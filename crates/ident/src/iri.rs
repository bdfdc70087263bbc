//! IRI-style identifiers below a configured base address.

use crate::extract::{decimal_digits, group_digits, hex_prefix, random_digits};
use crate::{
    AllocationLedger, DigitMode, EntityKind, IdScheme, IdentifierProvider, SeedDigest,
    Sha256Digest,
};
use rand::rngs::OsRng;
use rand::RngCore;

/// Base IRI used when the configured one is blank.
pub const DEFAULT_BASE_IRI: &str = "https://example.com";

/// Number of decimal digits in asset and submodel bodies.
const DIGIT_BODY_LEN: usize = 16;

/// Number of hex characters embedded in shell and concept description identifiers.
const HEX_LEN: usize = 8;

const SHELL_PREFIX: &str = "AssetAdministrationShell---";
const CONCEPT_PREFIX: &str = "ConceptDescription---";

/// Provider for the IRI scheme.
///
/// - Assets: `<base>/asset/dddd_dddd_dddd_dddd`
/// - Submodels: `<base>/sm/dddd_dddd_dddd_dddd`
/// - Shells: `AssetAdministrationShell---<hex8>`
/// - Concept descriptions: `ConceptDescription---<hex8>`
///
/// The digit bodies follow the configured [`DigitMode`]. The hex parts are always derived from the
/// digest, whatever the digit mode. In [`DigitMode::RandomSecure`] every probe attempt takes a
/// fresh draw from `R`.
#[derive(Debug)]
pub struct IriProvider<D = Sha256Digest, R = OsRng> {
    base: String,
    mode: DigitMode,
    digest: D,
    rng: R,
    ledger: AllocationLedger,
}

impl IriProvider {
    /// Creates a provider using SHA-256 seed digests.
    ///
    /// A blank `base_iri` is replaced by [`DEFAULT_BASE_IRI`]; trailing slashes are removed.
    pub fn new(base_iri: &str, mode: DigitMode) -> Self {
        Self::with_digest(base_iri, mode, Sha256Digest)
    }
}

impl<D: SeedDigest> IriProvider<D> {
    /// Creates a provider with a custom seed digest.
    pub fn with_digest(base_iri: &str, mode: DigitMode, digest: D) -> Self {
        Self::with_rng(base_iri, mode, digest, OsRng)
    }
}

impl<D: SeedDigest, R: RngCore> IriProvider<D, R> {
    /// Creates a provider with a custom seed digest and random source.
    ///
    /// `rng` is only used for digit bodies in [`DigitMode::RandomSecure`].
    pub fn with_rng(base_iri: &str, mode: DigitMode, digest: D, rng: R) -> Self {
        Self {
            base: normalise_base(base_iri),
            mode,
            digest,
            rng,
            ledger: AllocationLedger::new(),
        }
    }

    /// The effective base IRI after defaulting and trimming.
    pub fn base_iri(&self) -> &str {
        &self.base
    }

    pub fn digit_mode(&self) -> DigitMode {
        self.mode
    }

    fn digit_iri(&mut self, kind: EntityKind, segment: &str, short_names: &[&str]) -> String {
        let seed = kind.seed(short_names);
        let Self {
            base,
            mode,
            digest,
            rng,
            ledger,
        } = self;
        ledger.get_or_create(&seed, |attempt| {
            let body = match *mode {
                DigitMode::DeterministicHash => {
                    decimal_digits(&digest.digest(attempt), DIGIT_BODY_LEN)
                }
                DigitMode::RandomSecure => random_digits(&mut *rng, DIGIT_BODY_LEN),
            };
            format!("{base}/{segment}/{}", group_digits(&body))
        })
    }

    fn hex_token(&mut self, kind: EntityKind, prefix: &str, short_name: &str) -> String {
        let seed = kind.seed(&[short_name]);
        let Self { digest, ledger, .. } = self;
        ledger.get_or_create(&seed, |attempt| {
            format!("{prefix}{}", hex_prefix(&digest.digest(attempt), HEX_LEN))
        })
    }
}

impl<D: SeedDigest + Send, R: RngCore + Send> IdentifierProvider for IriProvider<D, R> {
    fn asset_id(&mut self, short_name: &str) -> String {
        self.digit_iri(EntityKind::Asset, "asset", &[short_name])
    }

    fn submodel_id(&mut self, shell_short_name: &str, submodel_short_name: &str) -> String {
        self.digit_iri(
            EntityKind::Submodel,
            "sm",
            &[shell_short_name, submodel_short_name],
        )
    }

    fn shell_id(&mut self, short_name: &str) -> String {
        self.hex_token(EntityKind::Shell, SHELL_PREFIX, short_name)
    }

    fn concept_description_id(&mut self, short_name: &str) -> String {
        self.hex_token(EntityKind::ConceptDescription, CONCEPT_PREFIX, short_name)
    }

    fn scheme(&self) -> IdScheme {
        IdScheme::Iri
    }

    fn ledger(&self) -> &AllocationLedger {
        &self.ledger
    }
}

fn normalise_base(base_iri: &str) -> String {
    let trimmed = base_iri.trim();
    if trimmed.is_empty() {
        return DEFAULT_BASE_IRI.to_owned();
    }
    trimmed.trim_end_matches('/').to_owned()
}
