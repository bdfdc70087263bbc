//! Per-provider allocation ledger.
//!
//! The ledger remembers which identifier each seed received and which identifiers have been issued
//! at all. It is the only place identifiers are recorded, and [`AllocationLedger::get_or_create`]
//! is the only way to record one.

use std::collections::{HashMap, HashSet};

/// Seed→identifier cache plus the set of every identifier issued so far.
///
/// # Invariants
/// - Every cached identifier is a member of the issued set.
/// - No two distinct seeds map to the same identifier.
///
/// A candidate is only cached after it passes the uniqueness check, so a colliding candidate can
/// never leak into the cache.
#[derive(Clone, Debug, Default)]
pub struct AllocationLedger {
    by_seed: HashMap<String, String>,
    issued: HashSet<String>,
}

impl AllocationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identifier for `seed`, generating and recording one on first use.
    ///
    /// `generate` maps an attempt seed to a candidate identifier. The first attempt uses `seed`
    /// unchanged; attempt `n >= 1` uses `seed#n`. Probing continues until a candidate that has not
    /// been issued before is found. There is no retry bound.
    pub fn get_or_create<F>(&mut self, seed: &str, mut generate: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        if let Some(existing) = self.by_seed.get(seed) {
            return existing.clone();
        }

        let mut attempt: u64 = 0;
        loop {
            let candidate = if attempt == 0 {
                generate(seed)
            } else {
                generate(&format!("{seed}#{attempt}"))
            };

            if self.issued.insert(candidate.clone()) {
                tracing::debug!(seed, identifier = %candidate, attempt, "issued identifier");
                self.by_seed.insert(seed.to_owned(), candidate.clone());
                return candidate;
            }

            tracing::debug!(seed, candidate = %candidate, attempt, "identifier collision, probing");
            attempt += 1;
        }
    }

    /// Returns the identifier previously issued for `seed`, if any.
    pub fn get(&self, seed: &str) -> Option<&str> {
        self.by_seed.get(seed).map(String::as_str)
    }

    /// Returns true if `identifier` has been issued for any seed.
    pub fn contains_identifier(&self, identifier: &str) -> bool {
        self.issued.contains(identifier)
    }

    /// Number of identifiers issued.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    /// Iterates over `(seed, identifier)` pairs in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_seed.iter().map(|(s, i)| (s.as_str(), i.as_str()))
    }
}
