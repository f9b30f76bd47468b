//! Resolution cache.

use std::collections::HashSet;

/// Set of lookup names that already have a rule in some bucket.
///
/// Only successful insertions are recorded, so a name whose rule was rejected
/// is attempted again on its next resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    names: HashSet<String>,
}

impl ResolutionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` already has a rule.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Record that `name` now has a rule. Returns `false` if it already did.
    pub fn record(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Forget every recorded name.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Number of recorded names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
