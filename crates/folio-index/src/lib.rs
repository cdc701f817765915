//! Hierarchical document catalog for folio.
//!
//! A catalog is a tree of documents parsed from nested JSON descriptors. This crate
//! handles:
//! - Url canonicalization against a base (fragments stripped)
//! - Parsing descriptors into a document tree, skipping malformed entries
//! - Depth-first traversal with early abort
//! - A flat pre-order cache with url lookups, rebuilt on demand
//! - Update notifications for listeners
//!
//! # Example
//!
//! ```
//! use folio_index::{BaseUrl, Index};
//!
//! let base = BaseUrl::parse("https://books.example/library/").unwrap();
//! let mut index = Index::new(base);
//! index.parse(r#"[{"url": "vol1/", "children": [{"url": "vol1/ch1.html"}]}]"#);
//! index.update();
//!
//! assert_eq!(index.document_count(), 2);
//! assert_eq!(
//!     index.document_at(1).unwrap().url(),
//!     "https://books.example/library/vol1/ch1.html"
//! );
//! ```

#![warn(missing_docs)]

mod base;
mod cache;
mod document;
mod error;
mod event;
mod index;
mod node;
mod parse;
mod walk;

pub use base::BaseUrl;
pub use cache::DocumentCache;
pub use document::{Document, Meta, UrlKey};
pub use error::IndexError;
pub use event::{IndexEvent, ListenerId};
pub use index::Index;
pub use node::{DocumentId, Parent, TreeNode};
pub use parse::CatalogInput;
pub use walk::Walk;
