//! Entity manifests.
//!
//! A manifest lists, in order, the model entities that need identifiers. It is what the
//! spreadsheet parser would hand over while building the model, written down as YAML or JSON:
//!
//! ```yaml
//! entities:
//!   - kind: shell
//!     name: Motor1
//!   - kind: asset
//!     name: Motor1
//!   - kind: submodel
//!     shell: Motor1
//!     submodel: Nameplate
//!   - kind: concept
//!     name: MaxRpm
//! ```

use crate::constants::JSON_EXTENSION;
use crate::{CoreError, CoreResult};
use aasx_ident::EntityKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entity that needs an identifier.
///
/// Short names are taken verbatim; empty strings are allowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityRequest {
    Asset {
        name: String,
    },
    Submodel {
        shell: String,
        submodel: String,
    },
    Shell {
        name: String,
    },
    #[serde(alias = "concept_description")]
    Concept {
        name: String,
    },
}

impl EntityRequest {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Asset { .. } => EntityKind::Asset,
            Self::Submodel { .. } => EntityKind::Submodel,
            Self::Shell { .. } => EntityKind::Shell,
            Self::Concept { .. } => EntityKind::ConceptDescription,
        }
    }

    /// Human-readable key: the short name, or `shell/submodel` for submodels.
    pub fn key(&self) -> String {
        match self {
            Self::Asset { name } | Self::Shell { name } | Self::Concept { name } => name.clone(),
            Self::Submodel { shell, submodel } => format!("{shell}/{submodel}"),
        }
    }
}

/// Ordered list of entity requests for one conversion run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub entities: Vec<EntityRequest>,
}

impl Manifest {
    pub fn from_yaml_str(contents: &str) -> CoreResult<Self> {
        serde_yaml::from_str(contents).map_err(CoreError::YamlDeserialization)
    }

    pub fn from_json_str(contents: &str) -> CoreResult<Self> {
        serde_json::from_str(contents).map_err(CoreError::JsonDeserialization)
    }

    /// Load a manifest file, parsing `.json` files as JSON and anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::FileRead`] if the file cannot be read, or a deserialization error if
    /// its contents are malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(CoreError::FileRead)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(JSON_EXTENSION));

        let manifest = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_yaml_str(&contents)?
        };
        tracing::debug!(
            "loaded manifest {} with {} entities",
            path.display(),
            manifest.entities.len()
        );
        Ok(manifest)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
entities:
  - kind: shell
    name: Motor1
  - kind: asset
    name: Motor1
  - kind: submodel
    shell: Motor1
    submodel: Nameplate
  - kind: concept_description
    name: MaxRpm
  - kind: concept
    name: ""
"#;

    #[test]
    fn test_parse_yaml_manifest() {
        let manifest = Manifest::from_yaml_str(YAML).unwrap();
        assert_eq!(manifest.len(), 5);
        assert_eq!(
            manifest.entities[2],
            EntityRequest::Submodel {
                shell: "Motor1".into(),
                submodel: "Nameplate".into()
            }
        );
        assert_eq!(
            manifest.entities[3],
            EntityRequest::Concept {
                name: "MaxRpm".into()
            }
        );
        assert_eq!(manifest.entities[4].key(), "");
    }

    #[test]
    fn test_parse_json_manifest() {
        let json = r#"{"entities":[{"kind":"asset","name":"Pump7"}]}"#;
        let manifest = Manifest::from_json_str(json).unwrap();
        assert_eq!(
            manifest.entities,
            vec![EntityRequest::Asset {
                name: "Pump7".into()
            }]
        );
    }

    #[test]
    fn test_missing_entities_is_empty() {
        let manifest = Manifest::from_json_str("{}").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = Manifest::from_yaml_str("entities:\n  - kind: widget\n    name: x\n");
        assert!(matches!(result, Err(CoreError::YamlDeserialization(_))));
    }

    #[test]
    fn test_kind_and_key() {
        let submodel = EntityRequest::Submodel {
            shell: "Motor1".into(),
            submodel: "Nameplate".into(),
        };
        assert_eq!(submodel.kind(), EntityKind::Submodel);
        assert_eq!(submodel.key(), "Motor1/Nameplate");

        let concept = EntityRequest::Concept {
            name: "MaxRpm".into(),
        };
        assert_eq!(concept.kind(), EntityKind::ConceptDescription);
    }

    #[test]
    fn test_load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("entities.yaml");
        std::fs::File::create(&yaml_path)
            .unwrap()
            .write_all(YAML.as_bytes())
            .unwrap();
        assert_eq!(Manifest::load(&yaml_path).unwrap().len(), 5);

        let json_path = dir.path().join("entities.JSON");
        std::fs::write(&json_path, r#"{"entities":[{"kind":"shell","name":"Motor1"}]}"#).unwrap();
        assert_eq!(Manifest::load(&json_path).unwrap().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Manifest::load(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(CoreError::FileRead(_))));
    }
}
