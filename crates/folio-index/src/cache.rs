//! Flat traversal cache.
//!
//! The cache is a snapshot of the tree as of the last [`Index::update`](crate::Index::update).
//! It is never patched incrementally: the index rebuilds it from scratch on every update and
//! replaces the old one wholesale, so structural edits in between leave it stale.

use std::collections::HashMap;

use crate::node::DocumentId;

/// Pre-order linearization of the tree plus url lookups into it.
#[derive(Debug, Clone, Default)]
pub struct DocumentCache {
    /// Documents in depth-first pre-order.
    documents: Vec<DocumentId>,
    /// Canonical url -> documents at that url, in traversal order.
    by_url: HashMap<String, Vec<DocumentId>>,
    /// Canonical url -> flat positions of documents at that url.
    positions: HashMap<String, Vec<usize>>,
}

impl DocumentCache {
    /// Builds a cache from `(id, url)` pairs given in pre-order.
    pub(crate) fn rebuild<'a>(entries: impl IntoIterator<Item = (DocumentId, &'a str)>) -> Self {
        let mut cache = Self::default();
        for (id, url) in entries {
            cache.record(id, url);
        }
        cache
    }

    /// Appends the next document in traversal order.
    pub(crate) fn record(&mut self, id: DocumentId, url: &str) {
        let position = self.documents.len();
        self.documents.push(id);
        self.by_url.entry(url.to_string()).or_default().push(id);
        self.positions
            .entry(url.to_string())
            .or_default()
            .push(position);
    }

    /// Returns the flat document sequence.
    pub fn documents(&self) -> &[DocumentId] {
        &self.documents
    }

    /// Returns the document at a flat position, or `None` when out of range.
    pub fn get(&self, position: usize) -> Option<DocumentId> {
        self.documents.get(position).copied()
    }

    /// Returns the number of cached documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the cache holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Returns the documents recorded for a url, or an empty slice.
    pub fn documents_at(&self, url: &str) -> &[DocumentId] {
        self.by_url.get(url).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the flat positions recorded for a url, or an empty slice.
    pub fn positions_of(&self, url: &str) -> &[usize] {
        self.positions.get(url).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of distinct urls.
    pub fn url_count(&self) -> usize {
        self.by_url.len()
    }

    /// Returns urls that occur more than once, sorted, with their occurrence counts.
    pub fn duplicates(&self) -> Vec<(&str, usize)> {
        let mut dups: Vec<(&str, usize)> = self
            .positions
            .iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(url, positions)| (url.as_str(), positions.len()))
            .collect();
        dups.sort_unstable();
        dups
    }
}
