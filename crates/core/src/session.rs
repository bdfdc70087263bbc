//! Conversion-run identifier session.
//!
//! One session corresponds to one conversion run and owns exactly one provider, so every entity in
//! the run is named against the same allocation ledger.

use crate::manifest::{EntityRequest, Manifest};
use crate::{CoreError, CoreResult, IdentifierConfig};
use aasx_ident::{EntityKind, IdScheme, IdentifierProvider};
use serde::{Deserialize, Serialize};

/// Identifier assigned to one entity request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub kind: EntityKind,
    pub key: String,
    pub identifier: String,
}

/// Names the entities of one conversion run.
#[derive(Debug)]
pub struct IdentifierSession {
    provider: Box<dyn IdentifierProvider>,
}

impl IdentifierSession {
    /// Start a session with a fresh provider built from `config`.
    pub fn new(config: &IdentifierConfig) -> Self {
        tracing::info!(
            "starting identifier session (scheme={}, digit_mode={})",
            config.scheme(),
            config.digit_mode()
        );
        Self::with_provider(config.build_provider())
    }

    pub fn with_provider(provider: Box<dyn IdentifierProvider>) -> Self {
        Self { provider }
    }

    pub fn scheme(&self) -> IdScheme {
        self.provider.scheme()
    }

    /// Derive the identifier for one request.
    pub fn assign(&mut self, request: &EntityRequest) -> Assignment {
        let identifier = match request {
            EntityRequest::Asset { name } => self.provider.asset_id(name),
            EntityRequest::Submodel { shell, submodel } => {
                self.provider.submodel_id(shell, submodel)
            }
            EntityRequest::Shell { name } => self.provider.shell_id(name),
            EntityRequest::Concept { name } => self.provider.concept_description_id(name),
        };

        Assignment {
            kind: request.kind(),
            key: request.key(),
            identifier,
        }
    }

    /// Derive identifiers for every request in manifest order.
    ///
    /// Repeated requests yield repeated identifiers.
    pub fn assign_all(&mut self, manifest: &Manifest) -> Vec<Assignment> {
        let assignments: Vec<Assignment> =
            manifest.entities.iter().map(|r| self.assign(r)).collect();
        tracing::info!(
            "assigned {} identifiers ({} distinct)",
            assignments.len(),
            self.issued_count()
        );
        assignments
    }

    /// Number of distinct identifiers issued in this session.
    pub fn issued_count(&self) -> usize {
        self.provider.ledger().len()
    }
}

/// Render assignments as pretty-printed JSON.
pub fn assignments_to_json(assignments: &[Assignment]) -> CoreResult<String> {
    serde_json::to_string_pretty(assignments).map_err(CoreError::JsonSerialization)
}

/// Render assignments as YAML.
pub fn assignments_to_yaml(assignments: &[Assignment]) -> CoreResult<String> {
    serde_yaml::to_string(assignments).map_err(CoreError::YamlSerialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aasx_ident::{DigitMode, UrnUuidProvider};

    fn manifest() -> Manifest {
        Manifest::from_yaml_str(
            r#"
entities:
  - kind: shell
    name: Motor1
  - kind: submodel
    shell: Motor1
    submodel: Nameplate
  - kind: asset
    name: Motor1
  - kind: shell
    name: Motor1
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_assign_all_preserves_order_and_repeats() {
        let config = IdentifierConfig::new(
            IdScheme::Iri,
            "https://example.org",
            DigitMode::DeterministicHash,
        );
        let mut session = IdentifierSession::new(&config);
        let assignments = session.assign_all(&manifest());

        assert_eq!(assignments.len(), 4);
        assert_eq!(assignments[0].kind, EntityKind::Shell);
        assert!(assignments[0]
            .identifier
            .starts_with("AssetAdministrationShell---"));
        assert_eq!(assignments[1].key, "Motor1/Nameplate");
        assert!(assignments[1]
            .identifier
            .starts_with("https://example.org/sm/"));
        assert!(assignments[2]
            .identifier
            .starts_with("https://example.org/asset/"));
        assert_eq!(assignments[3], assignments[0]);
        assert_eq!(session.issued_count(), 3);
    }

    #[test]
    fn test_sessions_are_deterministic() {
        let config = IdentifierConfig::default();
        let first = IdentifierSession::new(&config).assign_all(&manifest());
        let second = IdentifierSession::new(&config).assign_all(&manifest());
        assert_eq!(first, second);
    }

    #[test]
    fn test_uuid_session() {
        let mut session = IdentifierSession::with_provider(Box::new(UrnUuidProvider::new()));
        assert_eq!(session.scheme(), IdScheme::Uuid);

        let assignment = session.assign(&EntityRequest::Asset {
            name: "Pump7".into(),
        });
        assert_eq!(
            assignment.identifier,
            UrnUuidProvider::new().asset_id("Pump7")
        );
    }

    #[test]
    fn test_render_assignments() {
        let mut session = IdentifierSession::new(&IdentifierConfig::default());
        let assignments = session.assign_all(&manifest());

        let json = assignments_to_json(&assignments).unwrap();
        let parsed: Vec<Assignment> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, assignments);
        assert!(json.contains("\"kind\": \"submodel\""));

        let yaml = assignments_to_yaml(&assignments).unwrap();
        assert!(yaml.contains("key: Motor1/Nameplate"));
    }
}
