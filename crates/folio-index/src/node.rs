//! Ordered tree structure shared by the index root and its documents.
//!
//! Documents live in an arena owned by the [`Index`](crate::Index) and are addressed by
//! [`DocumentId`] handles. A [`TreeNode`] is the plain ordered-child container embedded in
//! both the index root and every document; it carries no semantics beyond structure.

use std::fmt;

use serde::Serialize;

/// Handle to a document stored in an index arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(pub(crate) usize);

impl DocumentId {
    /// Returns the raw arena slot of this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The node a child is appended to: the index root or a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// The index itself; its children are the top-level documents.
    Root,
    /// A document in the tree.
    Document(DocumentId),
}

impl From<DocumentId> for Parent {
    fn from(id: DocumentId) -> Self {
        Self::Document(id)
    }
}

impl From<Option<DocumentId>> for Parent {
    fn from(id: Option<DocumentId>) -> Self {
        id.map_or(Self::Root, Self::Document)
    }
}

/// Ordered child container with a non-owning parent back-reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Child handles in insertion order, which is also traversal order.
    children: Vec<DocumentId>,
    /// Where the node is attached, or `None` while detached.
    attached: Option<Parent>,
}

impl TreeNode {
    /// Returns the children in traversal order.
    pub fn children(&self) -> &[DocumentId] {
        &self.children
    }

    /// Returns the parent document, or `None` at the top level and while detached.
    pub fn parent(&self) -> Option<DocumentId> {
        match self.attached {
            Some(Parent::Document(id)) => Some(id),
            Some(Parent::Root) | None => None,
        }
    }

    /// Returns the node this one is attached to, or `None` while detached.
    pub fn attached(&self) -> Option<Parent> {
        self.attached
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child handle at the end of the sequence.
    pub(crate) fn push_child(&mut self, id: DocumentId) {
        self.children.push(id);
    }

    /// Removes a child handle, returning whether it was present.
    pub(crate) fn remove_child(&mut self, id: DocumentId) -> bool {
        let before = self.children.len();
        self.children.retain(|&c| c != id);
        self.children.len() != before
    }

    /// Replaces the parent back-reference.
    pub(crate) fn set_attached(&mut self, attached: Option<Parent>) {
        self.attached = attached;
    }
}
