//! Record of every position seen in a game, for superko detection.

use std::collections::HashSet;

use crate::board::Fingerprint;

/// Append-only set of position fingerprints.
#[derive(Clone, Debug, Default)]
pub struct PositionHistory {
    seen: HashSet<Fingerprint>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.seen.contains(fingerprint)
    }

    /// Insert a fingerprint. Returns `false` if it was already present.
    pub fn record(&mut self, fingerprint: Fingerprint) -> bool {
        self.seen.insert(fingerprint)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
