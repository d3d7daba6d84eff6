//! ValenceLookup trait — the only thing the sentiment scorer needs from a lexicon.
//!
//! The production implementation is the parsed VADER lexicon; tests inject
//! small in-memory tables.

use std::collections::HashMap;

/// Read-only token → valence table.
pub trait ValenceLookup: Send + Sync {
    /// Valence of a lower-cased token, if the table rates it.
    fn valence(&self, token: &str) -> Option<f64>;

    /// Number of rated tokens.
    fn len(&self) -> usize;

    fn contains(&self, token: &str) -> bool {
        self.valence(token).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ValenceLookup for HashMap<String, f64> {
    fn valence(&self, token: &str) -> Option<f64> {
        self.get(token).copied()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}
