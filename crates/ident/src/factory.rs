//! Construction of providers from configuration values.

use crate::{DigitMode, IdScheme, IdentifierProvider, IriProvider, UrnUuidProvider};

/// Builds the provider for one conversion run.
///
/// This is the only way callers outside the crate are expected to obtain a provider.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Creates a provider for `scheme`.
    ///
    /// `base_iri` and `mode` only matter for [`IdScheme::Iri`]; they are ignored otherwise.
    pub fn create(
        scheme: IdScheme,
        base_iri: &str,
        mode: DigitMode,
    ) -> Box<dyn IdentifierProvider> {
        tracing::debug!(%scheme, base_iri, %mode, "creating identifier provider");
        match scheme {
            IdScheme::Iri => Box::new(IriProvider::new(base_iri, mode)),
            IdScheme::Uuid => Box::new(UrnUuidProvider::new()),
        }
    }

    /// Creates a provider from a raw scheme selector.
    ///
    /// Unrecognised selectors fall back to the IRI scheme (see [`IdScheme::from_selector`]).
    pub fn from_selector(
        selector: &str,
        base_iri: &str,
        mode: DigitMode,
    ) -> Box<dyn IdentifierProvider> {
        Self::create(IdScheme::from_selector(selector), base_iri, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_iri_provider() {
        let mut provider = ProviderFactory::create(
            IdScheme::Iri,
            "https://example.org/",
            DigitMode::DeterministicHash,
        );
        assert_eq!(provider.scheme(), IdScheme::Iri);
        assert!(provider
            .asset_id("Pump7")
            .starts_with("https://example.org/asset/"));
        assert_eq!(provider.ledger().len(), 1);
    }

    #[test]
    fn test_create_uuid_provider_ignores_iri_settings() {
        let mut provider =
            ProviderFactory::create(IdScheme::Uuid, "https://example.org", DigitMode::RandomSecure);
        assert_eq!(provider.scheme(), IdScheme::Uuid);

        let id = provider.asset_id("Pump7");
        assert!(id.starts_with("urn:uuid:"));
        assert_eq!(UrnUuidProvider::new().asset_id("Pump7"), id);
    }

    #[test]
    fn test_from_selector_defaults_to_iri() {
        let provider = ProviderFactory::from_selector("bogus", "", DigitMode::default());
        assert_eq!(provider.scheme(), IdScheme::Iri);

        let provider = ProviderFactory::from_selector("UUID", "", DigitMode::default());
        assert_eq!(provider.scheme(), IdScheme::Uuid);
    }

    #[test]
    fn test_factory_providers_match_direct_construction() {
        let mut from_factory =
            ProviderFactory::create(IdScheme::Iri, "", DigitMode::DeterministicHash);
        let mut direct = IriProvider::new("", DigitMode::DeterministicHash);
        assert_eq!(
            from_factory.submodel_id("Motor1", "Nameplate"),
            direct.submodel_id("Motor1", "Nameplate")
        );
        assert!(from_factory
            .submodel_id("Motor1", "Nameplate")
            .starts_with("https://example.com/sm/"));
    }
}
