//! Constants used throughout the AASX core crate.
//!
//! Environment variable names are collected here so the binary and the tests agree on them.

/// Environment variable selecting the identifier scheme (`iri` or `uuid`).
pub const ID_SCHEME_ENV: &str = "AASX_ID_SCHEME";

/// Environment variable holding the base IRI for IRI-style identifiers.
pub const BASE_IRI_ENV: &str = "AASX_BASE_IRI";

/// Environment variable selecting the digit mode (`deterministic` or `random`).
pub const DIGIT_MODE_ENV: &str = "AASX_DIGIT_MODE";

/// File extension that selects JSON parsing for manifests; anything else is read as YAML.
pub const JSON_EXTENSION: &str = "json";
