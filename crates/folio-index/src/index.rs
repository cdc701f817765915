//! The catalog index: document tree, flat cache, and queries.

use std::mem;

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    IndexError,
    base::BaseUrl,
    cache::DocumentCache,
    document::{Document, Meta, UrlKey},
    event::{IndexEvent, ListenerId, Listeners},
    node::{DocumentId, Parent, TreeNode},
    parse::{CatalogInput, is_truthy},
    walk::Walk,
};

/// Root of a document catalog.
///
/// The index owns every document in an arena and is itself the root node of the tree:
/// its children are the top-level documents. Queries come in two flavours:
///
/// - cached queries ([`document_at`](Self::document_at),
///   [`document_count`](Self::document_count), [`documents`](Self::documents),
///   [`documents_at`](Self::documents_at), [`positions_of`](Self::positions_of)) read the
///   flat cache built by the last [`update`](Self::update) and go stale when the tree
///   changes;
/// - live queries ([`get`](Self::get), [`position_of`](Self::position_of)) walk the
///   current tree on every call.
#[derive(Debug)]
pub struct Index {
    /// Base used to canonicalize entry urls.
    base: BaseUrl,
    /// Top-level documents.
    root: TreeNode,
    /// Every document ever inserted, attached or not.
    arena: Vec<Document>,
    /// Snapshot from the last update.
    cache: DocumentCache,
    /// Update listeners.
    listeners: Listeners,
}

impl Index {
    /// Creates an empty index resolving entry urls against `base`.
    pub fn new(base: BaseUrl) -> Self {
        Self {
            base,
            root: TreeNode::default(),
            arena: Vec::new(),
            cache: DocumentCache::default(),
            listeners: Listeners::default(),
        }
    }

    /// Returns the base url entries are resolved against.
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Resolves a raw url the same way entry urls are resolved.
    pub fn canonicalize(&self, raw: &str) -> Result<String, IndexError> {
        self.base.canonicalize(raw)
    }

    /// Parses a catalog and attaches its top-level documents to the root.
    ///
    /// Malformed input never fails the call: undecodable text or a non-array value is
    /// logged and yields an empty result, and entries without a url are skipped. Returns
    /// the documents actually attached, in order.
    pub fn parse<'a>(&mut self, input: impl Into<CatalogInput<'a>>) -> Vec<DocumentId> {
        match self.try_parse(input) {
            Ok(attached) => attached,
            Err(e) => {
                warn!(error = %e, "ignoring malformed catalog");
                Vec::new()
            }
        }
    }

    /// Like [`parse`](Self::parse), but reports decode and shape failures to the caller.
    pub fn try_parse<'a>(
        &mut self,
        input: impl Into<CatalogInput<'a>>,
    ) -> Result<Vec<DocumentId>, IndexError> {
        let input = input.into();
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let entries = input.into_entries()?;
        let parsed: Vec<DocumentId> = entries
            .iter()
            .filter_map(|entry| self.parse_entry(entry))
            .collect();

        Ok(parsed
            .into_iter()
            .filter_map(|id| self.append_child(Parent::Root, Some(id)))
            .collect())
    }

    /// Builds a detached document subtree from one raw descriptor.
    ///
    /// Returns `None`, after logging a warning, when the descriptor has no usable url.
    /// Every field of the descriptor is copied into the document's metadata, `url` and
    /// `children` included. Children are parsed depth-first and attached in order;
    /// malformed children are skipped without affecting their siblings.
    pub fn parse_entry(&mut self, raw: &Value) -> Option<DocumentId> {
        let Some(fields) = raw.as_object() else {
            warn!(entry = %raw, "skipping catalog entry that is not an object");
            return None;
        };

        let raw_url = match fields.get("url") {
            Some(url) if is_truthy(url) => url,
            _ => {
                warn!(entry = %raw, "skipping catalog entry without a url");
                return None;
            }
        };
        let raw_url = match raw_url {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        let url = match self.base.canonicalize(&raw_url) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "skipping catalog entry with unresolvable url");
                return None;
            }
        };

        let meta: Meta = fields.clone();
        let id = self.insert(Document::new(url, meta));

        if let Some(Value::Array(children)) = fields.get("children") {
            for child in children {
                let child = self.parse_entry(child);
                self.append_child(id, child);
            }
        }

        Some(id)
    }

    /// Adds a detached document to the arena.
    pub fn insert(&mut self, mut document: Document) -> DocumentId {
        let id = DocumentId(self.arena.len());
        document.node = TreeNode::default();
        self.arena.push(document);
        id
    }

    /// Appends `child` as the last child of `parent` and returns it.
    ///
    /// `None` is passed through unchanged, so the result of a failed parse can be
    /// appended without a guard. A child that is already attached elsewhere is moved.
    /// Returns `None` without changing anything if `child` is unknown or if `parent`
    /// is `child` itself or one of its descendants. The flat cache is not touched.
    pub fn append_child(
        &mut self,
        parent: impl Into<Parent>,
        child: Option<DocumentId>,
    ) -> Option<DocumentId> {
        let child = child?;
        let parent = parent.into();

        if self.arena.get(child.0).is_none() {
            warn!(%child, "cannot append unknown document");
            return None;
        }
        if let Parent::Document(p) = parent {
            if self.arena.get(p.0).is_none() {
                warn!(parent = %p, "cannot append to unknown document");
                return None;
            }
            if p == child || self.ancestors(p).contains(&child) {
                warn!(%child, parent = %p, "refusing to append a document under itself");
                return None;
            }
        }

        self.detach(child);
        match parent {
            Parent::Root => self.root.push_child(child),
            Parent::Document(p) => self.arena[p.0].node.push_child(child),
        }
        self.arena[child.0].node.set_attached(Some(parent));
        Some(child)
    }

    /// Removes `id` from whatever node currently holds it. Detached nodes are left alone.
    fn detach(&mut self, id: DocumentId) {
        let removed = match self.arena[id.0].node.attached() {
            None => return,
            Some(Parent::Root) => self.root.remove_child(id),
            Some(Parent::Document(p)) => self.arena[p.0].node.remove_child(id),
        };
        debug_assert!(removed, "attached document missing from its parent");
        self.arena[id.0].node.set_attached(None);
    }

    /// Walks the tree depth-first in pre-order, starting at `nodes`.
    ///
    /// The visitor receives each document with its handle. As soon as it returns a value
    /// that converts to [`Walk::Stop`] (typically a literal `false`), the whole traversal
    /// ends: neither the node's children nor any later sibling at any level is visited.
    /// Every other value, `()` and `true` included, continues into the node's children.
    ///
    /// Returns [`Walk::Stop`] if the walk was aborted.
    pub fn walk<'a, R, F>(&'a self, nodes: &[DocumentId], mut visit: F) -> Walk
    where
        R: Into<Walk>,
        F: FnMut(DocumentId, &'a Document) -> R,
    {
        // Reversed so the leftmost node is popped first.
        let mut stack: Vec<DocumentId> = nodes.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(doc) = self.arena.get(id.0) else {
                continue;
            };
            let step: Walk = visit(id, doc).into();
            if step.is_stop() {
                return Walk::Stop;
            }
            stack.extend(doc.children().iter().rev().copied());
        }
        Walk::Continue
    }

    /// Walks the whole tree from the top-level documents.
    pub fn walk_all<'a, R, F>(&'a self, visit: F) -> Walk
    where
        R: Into<Walk>,
        F: FnMut(DocumentId, &'a Document) -> R,
    {
        self.walk(self.root.children(), visit)
    }

    /// Rebuilds the flat cache from the current tree and notifies listeners.
    ///
    /// The previous cache is discarded; the new one records every attached document in
    /// pre-order together with its url and flat position. Listeners are then called
    /// exactly once with [`IndexEvent::Updated`].
    pub fn update(&mut self) {
        let mut entries = Vec::new();
        self.walk_all(|id, doc| entries.push((id, doc.url())));
        self.cache = DocumentCache::rebuild(entries);
        debug!(
            documents = self.cache.len(),
            urls = self.cache.url_count(),
            "index updated"
        );

        let mut listeners = mem::take(&mut self.listeners);
        listeners.dispatch(&IndexEvent::Updated(self));
        self.listeners = listeners;
    }

    /// Registers a listener called after every [`update`](Self::update).
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&IndexEvent<'_>) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns the cached document at a flat position, or `None` when out of range.
    pub fn document_at(&self, position: usize) -> Option<&Document> {
        self.cache.get(position).and_then(|id| self.document(id))
    }

    /// Returns the number of cached documents.
    pub fn document_count(&self) -> usize {
        self.cache.len()
    }

    /// Returns the cached flat document sequence.
    pub fn documents(&self) -> &[DocumentId] {
        self.cache.documents()
    }

    /// Iterates over the cached documents in flat order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.cache
            .documents()
            .iter()
            .filter_map(|&id| self.document(id))
    }

    /// Returns the cached documents for a canonical url.
    pub fn documents_at(&self, url: &str) -> &[DocumentId] {
        self.cache.documents_at(url)
    }

    /// Returns the cached flat positions for a canonical url.
    pub fn positions_of(&self, url: &str) -> &[usize] {
        self.cache.positions_of(url)
    }

    /// Returns the cache built by the last update.
    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Returns the live pre-order position of the last document equal to `key`.
    ///
    /// The tree is walked in full on every call and never stops at the first hit, so
    /// when several documents share a url the position of the last one wins.
    pub fn position_of<K: UrlKey + ?Sized>(&self, key: &K) -> Option<usize> {
        let mut position = 0;
        let mut found = None;
        self.walk_all(|_, doc| {
            if doc.equals(key) {
                found = Some(position);
            }
            position += 1;
        });
        found
    }

    /// Returns every document equal to `key`, in live traversal order.
    pub fn get<K: UrlKey + ?Sized>(&self, key: &K) -> Vec<&Document> {
        let mut matches = Vec::new();
        self.walk_all(|_, doc| {
            if doc.equals(key) {
                matches.push(doc);
            }
        });
        matches
    }

    /// Returns a document by handle.
    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.arena.get(id.0)
    }

    /// Returns a document by handle for metadata edits.
    pub fn document_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.arena.get_mut(id.0)
    }

    /// Returns the top-level documents.
    pub fn roots(&self) -> &[DocumentId] {
        self.root.children()
    }

    /// Returns the children of the root or of a document.
    pub fn children(&self, parent: impl Into<Parent>) -> &[DocumentId] {
        match parent.into() {
            Parent::Root => self.root.children(),
            Parent::Document(id) => self
                .document(id)
                .map(Document::children)
                .unwrap_or_default(),
        }
    }

    /// Returns the parent of a document, or `None` at the top level.
    pub fn parent(&self, id: DocumentId) -> Option<DocumentId> {
        self.document(id).and_then(Document::parent)
    }

    /// Returns the ancestors of a document, outermost first.
    pub fn ancestors(&self, id: DocumentId) -> Vec<DocumentId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.parent(parent);
        }
        ancestors.reverse();
        ancestors
    }

    /// Returns the nesting depth of a document (0 for top level).
    pub fn depth(&self, id: DocumentId) -> usize {
        self.ancestors(id).len()
    }
}
