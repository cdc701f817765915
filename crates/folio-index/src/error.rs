//! Error types for the folio-index crate.

use thiserror::Error;

/// Errors that can occur when building an index.
///
/// None of these are fatal: [`Index::parse`](crate::Index::parse) logs them and degrades
/// to an empty result, while [`Index::try_parse`](crate::Index::try_parse) hands them to
/// the caller.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Encoded catalog input is not valid JSON.
    #[error("failed to decode catalog: {source}")]
    Decode {
        /// Underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// Decoded catalog input is not an array of entries.
    #[error("catalog must be an array of entries, found {found}")]
    NotAnArray {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// The base url cannot be parsed as an absolute url.
    #[error("invalid base url '{url}': {source}")]
    InvalidBaseUrl {
        /// The rejected base url.
        url: String,
        /// Underlying url parse error.
        source: url::ParseError,
    },

    /// An entry url cannot be resolved against the base.
    #[error("cannot resolve url '{url}': {source}")]
    InvalidUrl {
        /// The rejected entry url.
        url: String,
        /// Underlying url parse error.
        source: url::ParseError,
    },
}
