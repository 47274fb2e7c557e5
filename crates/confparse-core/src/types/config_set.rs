//! The configuration set: every document of one invocation, keyed by source.

use super::{Document, SourceId};
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

/// Mapping from source identifier to parsed document.
///
/// Entries iterate in lexicographic order of their source identifier, which makes
/// per-source reports stable across runs regardless of resolution order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigSet<D = Document> {
    entries: BTreeMap<SourceId, D>,
}

impl<D> ConfigSet<D> {
    /// Create an empty configuration set
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a document, returning the one previously stored under the same source
    pub fn insert(&mut self, source: impl Into<SourceId>, document: D) -> Option<D> {
        self.entries.insert(source.into(), document)
    }

    /// Look up the document for a source
    pub fn get(&self, source: &str) -> Option<&D> {
        self.entries.get(source)
    }

    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Source identifiers in iteration order
    pub fn sources(&self) -> impl Iterator<Item = &SourceId> {
        self.entries.keys()
    }
}

impl<D> Default for ConfigSet<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<SourceId>, D> FromIterator<(S, D)> for ConfigSet<D> {
    fn from_iter<I: IntoIterator<Item = (S, D)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(s, d)| (s.into(), d)).collect(),
        }
    }
}

impl<D> IntoIterator for ConfigSet<D> {
    type Item = (SourceId, D);
    type IntoIter = btree_map::IntoIter<SourceId, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, D> IntoIterator for &'a ConfigSet<D> {
    type Item = (&'a SourceId, &'a D);
    type IntoIter = btree_map::Iter<'a, SourceId, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
