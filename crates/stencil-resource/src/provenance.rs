//! Provenance tracking: which root last supplied which template
//!
//! The table is keyed by the raw requested name, exactly as the caller spelled
//! it, so a later staleness check for the same name re-derives the same file.
//! Entries are overwritten on every successful resolve and never proactively
//! removed; a stale entry for a deleted template persists until a new resolve
//! overwrites it, a bounded cost since the set of distinct template names per
//! application is small.

use dashmap::DashMap;

/// Concurrent map from template name to the root that last supplied it
///
/// Individual get/put operations are atomic; no sequence of operations needs
/// to be, so no lock is ever held across filesystem I/O.
#[derive(Debug, Default)]
pub struct ProvenanceTable {
    entries: DashMap<String, String>,
}

impl ProvenanceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `root` supplied `name`, overwriting any previous entry
    pub fn record(&self, name: &str, root: &str) {
        self.entries.insert(name.to_string(), root.to_string());
    }

    /// The root that last supplied `name`, if it was ever resolved
    pub fn root_for(&self, name: &str) -> Option<String> {
        self.entries.get(name).map(|entry| entry.value().clone())
    }

    /// Number of tracked templates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any template has been tracked yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
