//! Errors raised while loading `.folio.toml` files.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// A configuration file that could not be turned into settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Unreadable {
        /// Config file.
        path: PathBuf,
        /// I/O failure.
        source: io::Error,
    },

    /// The file is not valid TOML or has fields of the wrong type.
    #[error("invalid configuration in {path}: {source}")]
    Malformed {
        /// Config file.
        path: PathBuf,
        /// Decoder error, with line and column.
        source: de::Error,
    },

    /// A `~` catalog path was given but there is no home directory to expand it to.
    #[error("cannot expand catalog path {path}: home directory unknown")]
    NoHome {
        /// The catalog path as written.
        path: String,
    },
}
