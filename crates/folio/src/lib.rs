//! folio: browse and query hierarchical document catalogs.
//!
//! A catalog is a JSON array of nested entries, each naming a document by url. folio
//! loads a catalog into a [`folio_index::Index`], flattens it in depth-first order and
//! answers positional and url lookups from the command line.

#![warn(missing_docs)]

pub mod cli;
