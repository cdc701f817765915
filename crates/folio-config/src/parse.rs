//! Reading a single `.folio.toml`.
//!
//! Every key is optional here; a file may set only `[log]`, or only a catalog base,
//! and leave the rest to files further up the chain.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::ConfigError;

/// Settings exactly as one file spells them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// `root = true` stops discovery at this file.
    pub root: Option<bool>,
    /// `[catalog]`
    pub catalog: Option<RawCatalog>,
    /// `[log]`
    pub log: Option<RawLog>,
}

/// The `[catalog]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCatalog {
    /// Catalog JSON file; `~/` and paths relative to the defining file are allowed.
    pub path: Option<String>,
    /// Absolute url that entry urls resolve against.
    pub base: Option<String>,
}

/// The `[log]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawLog {
    /// `tracing` filter directive.
    pub level: Option<String>,
}

/// One config file and the settings it holds.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Where the file was read from; relative catalog paths resolve against its parent.
    pub path: PathBuf,
    /// Its settings.
    pub raw: RawConfig,
}

impl ConfigFile {
    /// Reads and decodes the file at `path`.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(path, &text)
    }

    /// Decodes `text` as if it had been read from `path`.
    pub fn decode(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let raw = toml::from_str(text).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            raw,
        })
    }

    /// Returns true if the file sets `root = true`.
    pub fn is_root(&self) -> bool {
        self.raw.root == Some(true)
    }

    /// Directory the file lives in.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Returns true if `path` decodes and sets `root = true`. Unreadable files never stop
/// discovery; loading reports them instead.
pub fn is_root_config(path: &Path) -> bool {
    ConfigFile::read(path).is_ok_and(|file| file.is_root())
}
