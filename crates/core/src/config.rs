//! Identifier configuration.
//!
//! This module defines configuration that is resolved once at process startup and then passed into
//! the conversion session. The settings layer (or the CLI) hands over raw strings; nothing below
//! this point reads environment variables.

use crate::constants::{BASE_IRI_ENV, DIGIT_MODE_ENV, ID_SCHEME_ENV};
use crate::CoreResult;
use aasx_ident::{DigitMode, IdScheme, IdentifierProvider, ProviderFactory};

/// Identifier settings for one conversion run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierConfig {
    scheme: IdScheme,
    base_iri: String,
    digit_mode: DigitMode,
}

impl IdentifierConfig {
    /// Create a new `IdentifierConfig`.
    ///
    /// `base_iri` is kept verbatim; the IRI provider applies its own default when it is blank.
    pub fn new(scheme: IdScheme, base_iri: impl Into<String>, digit_mode: DigitMode) -> Self {
        Self {
            scheme,
            base_iri: base_iri.into(),
            digit_mode,
        }
    }

    /// Resolve configuration from optional raw values, as read from the environment.
    ///
    /// - `scheme`: absent or blank selects IRI; unrecognised values fall back to IRI with a
    ///   warning.
    /// - `base_iri`: absent means blank.
    /// - `digit_mode`: absent or blank selects deterministic hashing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Ident`] if `digit_mode` is present but not recognised.
    pub fn from_env_values(
        scheme: Option<String>,
        base_iri: Option<String>,
        digit_mode: Option<String>,
    ) -> CoreResult<Self> {
        let scheme = scheme
            .as_deref()
            .map(IdScheme::from_selector)
            .unwrap_or_default();
        let digit_mode = DigitMode::from_optional(digit_mode.as_deref())?;

        Ok(Self::new(scheme, base_iri.unwrap_or_default(), digit_mode))
    }

    /// Resolve configuration from `AASX_ID_SCHEME`, `AASX_BASE_IRI` and `AASX_DIGIT_MODE`.
    ///
    /// Intended to be called once at startup, after any `.env` file has been loaded.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_env_values(
            std::env::var(ID_SCHEME_ENV).ok(),
            std::env::var(BASE_IRI_ENV).ok(),
            std::env::var(DIGIT_MODE_ENV).ok(),
        )
    }

    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }

    pub fn base_iri(&self) -> &str {
        &self.base_iri
    }

    pub fn digit_mode(&self) -> DigitMode {
        self.digit_mode
    }

    pub fn with_scheme(mut self, scheme: IdScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = base_iri.into();
        self
    }

    pub fn with_digit_mode(mut self, digit_mode: DigitMode) -> Self {
        self.digit_mode = digit_mode;
        self
    }

    /// Build a fresh provider for one conversion run.
    pub fn build_provider(&self) -> Box<dyn IdentifierProvider> {
        ProviderFactory::create(self.scheme, &self.base_iri, self.digit_mode)
    }
}
