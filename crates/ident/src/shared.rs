//! Lock-serialised access to one provider from several threads.

use crate::{IdScheme, IdentifierProvider};
use std::sync::{Arc, Mutex, MutexGuard};

/// A provider shared behind a mutex.
///
/// The lock is held for the whole of each derivation, so the cache lookup and the insert of a new
/// identifier happen as one step. Clones share the same provider and ledger.
#[derive(Clone, Debug)]
pub struct SharedProvider {
    inner: Arc<Mutex<Box<dyn IdentifierProvider>>>,
}

impl SharedProvider {
    pub fn new(provider: Box<dyn IdentifierProvider>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(provider)),
        }
    }

    pub fn asset_id(&self, short_name: &str) -> String {
        self.lock().asset_id(short_name)
    }

    pub fn submodel_id(&self, shell_short_name: &str, submodel_short_name: &str) -> String {
        self.lock()
            .submodel_id(shell_short_name, submodel_short_name)
    }

    pub fn shell_id(&self, short_name: &str) -> String {
        self.lock().shell_id(short_name)
    }

    pub fn concept_description_id(&self, short_name: &str) -> String {
        self.lock().concept_description_id(short_name)
    }

    pub fn scheme(&self) -> IdScheme {
        self.lock().scheme()
    }

    /// Number of identifiers issued so far.
    pub fn issued_count(&self) -> usize {
        self.lock().ledger().len()
    }

    // Poisoning is recovered; the cache is only written after the identifier set accepted the
    // candidate.
    fn lock(&self) -> MutexGuard<'_, Box<dyn IdentifierProvider>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
