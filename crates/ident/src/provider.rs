//! The identifier capability set shared by every scheme.

use crate::{AllocationLedger, IdScheme};
use std::fmt;

/// Kind of model entity an identifier is derived for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityKind {
    Asset,
    Submodel,
    Shell,
    ConceptDescription,
}

impl EntityKind {
    /// Literal tag that prefixes every seed of this kind.
    pub fn seed_tag(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Submodel => "submodel",
            Self::Shell => "aas",
            Self::ConceptDescription => "concept",
        }
    }

    /// Builds the kind-tagged seed: the tag and each short name joined by `:`.
    ///
    /// Short names are used verbatim; empty or whitespace names are not rejected. Names are not
    /// escaped, so a `:` inside a short name can alias another split of the same text:
    /// `["a:b", "c"]` and `["a", "b:c"]` build the same seed and therefore the same identifier.
    pub fn seed(self, short_names: &[&str]) -> String {
        let mut seed = self.seed_tag().to_owned();
        for name in short_names {
            seed.push(':');
            seed.push_str(name);
        }
        seed
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Asset => "asset",
            Self::Submodel => "submodel",
            Self::Shell => "shell",
            Self::ConceptDescription => "concept_description",
        };
        write!(f, "{name}")
    }
}

/// Derives stable identifiers for model entities from their short names.
///
/// Every operation is total: any string is accepted and an identifier is always returned. Within
/// one provider instance the same arguments always yield the same identifier, and different
/// arguments never share one.
///
/// Providers are not safe for concurrent use. Wrap one in [`crate::SharedProvider`] when calls
/// must come from several threads.
pub trait IdentifierProvider: Send {
    /// Identifier for the asset described by the shell `short_name`.
    fn asset_id(&mut self, short_name: &str) -> String;

    /// Identifier for submodel `submodel_short_name` of shell `shell_short_name`.
    fn submodel_id(&mut self, shell_short_name: &str, submodel_short_name: &str) -> String;

    /// Identifier for the asset administration shell `short_name`.
    fn shell_id(&mut self, short_name: &str) -> String;

    /// Identifier for the concept description `short_name`.
    fn concept_description_id(&mut self, short_name: &str) -> String;

    /// Scheme this provider produces.
    fn scheme(&self) -> IdScheme;

    /// Read-only view of everything issued so far.
    fn ledger(&self) -> &AllocationLedger;
}

impl fmt::Debug for dyn IdentifierProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierProvider")
            .field("scheme", &self.scheme())
            .field("issued", &self.ledger().len())
            .finish()
    }
}
