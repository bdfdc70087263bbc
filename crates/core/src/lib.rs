//! # AASX Core
//!
//! The boundary between the spreadsheet converter and identifier generation.
//!
//! This crate contains:
//! - Startup configuration for the identifier scheme ([`IdentifierConfig`])
//! - The entity manifest format standing in for parsed spreadsheet rows ([`Manifest`])
//! - The per-run session that names every entity through one provider ([`IdentifierSession`])
//!
//! **No XML or GUI concerns**: model serialisation and settings persistence live elsewhere.

pub mod config;
pub mod constants;
pub mod error;
pub mod manifest;
pub mod session;

pub use aasx_ident as ident;
pub use config::IdentifierConfig;
pub use error::{CoreError, CoreResult};
pub use manifest::{EntityRequest, Manifest};
pub use session::{assignments_to_json, assignments_to_yaml, Assignment, IdentifierSession};
