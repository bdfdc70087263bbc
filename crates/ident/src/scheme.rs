//! Configuration values that select how identifiers are shaped.

use crate::{IdentError, IdentResult};
use std::{fmt, str::FromStr};

/// Identifier scheme used for a conversion run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IdScheme {
    /// Identifiers below a configured base IRI.
    #[default]
    Iri,
    /// `urn:uuid:` identifiers derived from a hash.
    Uuid,
}

impl IdScheme {
    /// Resolves a raw selector string, falling back to [`IdScheme::Iri`] when it is not
    /// recognised.
    ///
    /// Blank selectors resolve to the default silently; any other unrecognised value is logged.
    pub fn from_selector(selector: &str) -> Self {
        if selector.trim().is_empty() {
            return Self::default();
        }
        selector.parse().unwrap_or_else(|err: IdentError| {
            tracing::warn!("{err}; falling back to the IRI scheme");
            Self::Iri
        })
    }
}

impl FromStr for IdScheme {
    type Err = IdentError;

    /// Parses `iri`, `uuid` or `urn` (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iri" => Ok(Self::Iri),
            "uuid" | "urn" => Ok(Self::Uuid),
            _ => Err(IdentError::UnknownScheme(s.to_owned())),
        }
    }
}

impl fmt::Display for IdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri => write!(f, "iri"),
            Self::Uuid => write!(f, "uuid"),
        }
    }
}

/// How the 16-digit bodies of IRI asset and submodel identifiers are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DigitMode {
    /// Digits are the leading decimal digits of the seed's SHA-256 digest.
    #[default]
    DeterministicHash,
    /// Digits come from the OS random source; the seed is ignored.
    RandomSecure,
}

impl DigitMode {
    /// Parses an optional raw value, treating absent or blank input as the default.
    ///
    /// # Errors
    ///
    /// Returns [`IdentError::UnknownDigitMode`] for any other unrecognised value.
    pub fn from_optional(value: Option<&str>) -> IdentResult<Self> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.parse(),
            None => Ok(Self::default()),
        }
    }
}

impl FromStr for DigitMode {
    type Err = IdentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deterministic" | "hash" | "deterministic-hash" => Ok(Self::DeterministicHash),
            "random" | "secure" | "random-secure" => Ok(Self::RandomSecure),
            _ => Err(IdentError::UnknownDigitMode(s.to_owned())),
        }
    }
}

impl fmt::Display for DigitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeterministicHash => write!(f, "deterministic-hash"),
            Self::RandomSecure => write!(f, "random-secure"),
        }
    }
}
