//! `urn:uuid:` identifiers derived from seed digests.

use crate::{
    AllocationLedger, EntityKind, IdScheme, IdentifierProvider, SeedDigest, Sha256Digest,
};
use uuid::Uuid;

/// Provider for the UUID scheme.
///
/// Each identifier is the first 16 bytes of the attempt seed's digest, taken as-is (no version or
/// variant bits are set) and formatted as `urn:uuid:xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
/// There is no random mode: fresh providers always agree.
#[derive(Debug, Default)]
pub struct UrnUuidProvider<D = Sha256Digest> {
    digest: D,
    ledger: AllocationLedger,
}

impl UrnUuidProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: SeedDigest> UrnUuidProvider<D> {
    /// Creates a provider with a custom seed digest.
    pub fn with_digest(digest: D) -> Self {
        Self {
            digest,
            ledger: AllocationLedger::new(),
        }
    }

    fn urn(&mut self, kind: EntityKind, short_names: &[&str]) -> String {
        let seed = kind.seed(short_names);
        let Self { digest, ledger } = self;
        ledger.get_or_create(&seed, |attempt| {
            let hash = digest.digest(attempt);
            let mut bytes = [0u8; 16];
            bytes.copy_from_slice(&hash[..16]);
            Uuid::from_bytes(bytes).urn().to_string()
        })
    }
}

impl<D: SeedDigest + Send> IdentifierProvider for UrnUuidProvider<D> {
    fn asset_id(&mut self, short_name: &str) -> String {
        self.urn(EntityKind::Asset, &[short_name])
    }

    fn submodel_id(&mut self, shell_short_name: &str, submodel_short_name: &str) -> String {
        self.urn(
            EntityKind::Submodel,
            &[shell_short_name, submodel_short_name],
        )
    }

    fn shell_id(&mut self, short_name: &str) -> String {
        self.urn(EntityKind::Shell, &[short_name])
    }

    fn concept_description_id(&mut self, short_name: &str) -> String {
        self.urn(EntityKind::ConceptDescription, &[short_name])
    }

    fn scheme(&self) -> IdScheme {
        IdScheme::Uuid
    }

    fn ledger(&self) -> &AllocationLedger {
        &self.ledger
    }
}
