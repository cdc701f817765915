//! Catalog documents and url identity.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::node::{DocumentId, TreeNode};

/// Arbitrary metadata copied from a raw descriptor.
pub type Meta = Map<String, Value>;

/// Anything that carries a canonical url and can be compared with a document.
pub trait UrlKey {
    /// Returns the canonical url used for identity comparison.
    fn url_key(&self) -> &str;
}

impl UrlKey for str {
    fn url_key(&self) -> &str {
        self
    }
}

impl UrlKey for String {
    fn url_key(&self) -> &str {
        self
    }
}

impl<T: UrlKey + ?Sized> UrlKey for &T {
    fn url_key(&self) -> &str {
        (**self).url_key()
    }
}

/// A node in the catalog tree.
///
/// A document is identified by its canonical url: absolute, resolved against the
/// catalog base, and with any fragment removed. Several documents in one tree may share
/// a url. `meta` is a shallow copy of every field on the descriptor that produced the
/// document, `url` and `children` included.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Canonical url.
    url: String,
    /// Descriptor fields.
    meta: Meta,
    /// Structural links into the owning index.
    #[serde(skip)]
    pub(crate) node: TreeNode,
}

impl Document {
    /// Creates a detached document from a canonical url and metadata.
    pub fn new(url: impl Into<String>, meta: Meta) -> Self {
        Self {
            url: url.into(),
            meta,
            node: TreeNode::default(),
        }
    }

    /// Returns the canonical url.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the descriptor metadata.
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Returns the descriptor metadata for editing.
    pub fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    /// Returns the `title` metadata field when it is a string.
    pub fn title(&self) -> Option<&str> {
        self.meta.get("title").and_then(Value::as_str)
    }

    /// Returns child handles in traversal order.
    pub fn children(&self) -> &[DocumentId] {
        self.node.children()
    }

    /// Returns the parent document, or `None` for top-level and detached documents.
    pub fn parent(&self) -> Option<DocumentId> {
        self.node.parent()
    }

    /// Returns true if `other` (a document or a url string) has the same canonical url.
    ///
    /// This is plain string equality; no normalization happens beyond what was applied
    /// when the document was created.
    pub fn equals<K: UrlKey + ?Sized>(&self, other: &K) -> bool {
        self.url == other.url_key()
    }
}

impl UrlKey for Document {
    fn url_key(&self) -> &str {
        &self.url
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Document {}

impl PartialEq<str> for Document {
    fn eq(&self, other: &str) -> bool {
        self.equals(other)
    }
}

impl PartialEq<&str> for Document {
    fn eq(&self, other: &&str) -> bool {
        self.equals(*other)
    }
}

impl PartialEq<String> for Document {
    fn eq(&self, other: &String) -> bool {
        self.equals(other)
    }
}
