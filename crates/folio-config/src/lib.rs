//! `.folio.toml` settings for the folio catalog reader.
//!
//! A working directory picks up every `.folio.toml` between it and the filesystem root,
//! nearest first, then `~/.folio.toml`. The nearest file that sets a key wins, and a
//! file with `root = true` hides everything above it.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::merge_configs;
pub use parse::{ConfigFile, RawCatalog, RawConfig, RawLog};
pub use resolve::resolve_catalog_path;
use serde::{Deserialize, Serialize};
pub use templates::ConfigTemplate;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Settings in effect after merging the discovery chain.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Which catalog to read and how its urls resolve.
    pub catalog: CatalogSettings,
    /// Diagnostics filter.
    pub log: LogSettings,
    /// Directory of the nearest config file, if any was found.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Discovers and merges every `.folio.toml` that applies in `cwd`.
    ///
    /// With no files at all, the defaults apply: no catalog and `warn` logging.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&discover_config_files(cwd))
    }

    /// Reads and merges an explicit chain of files, nearest first.
    ///
    /// The first unreadable or malformed file aborts the load.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let chain = files
            .iter()
            .map(|path| ConfigFile::read(path))
            .collect::<Result<Vec<_>, _>>()?;
        merge_configs(&chain)
    }

    /// Checks the settings without failing; see [`ConfigWarning`] for what is reported.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Renders the effective settings as TOML, as printed by `folio config`.
    pub fn settings_to_toml(&self) -> String {
        let view = EffectiveSettings {
            catalog: EffectiveCatalog {
                path: self.catalog.path.as_deref().map(|p| p.display().to_string()),
                base: self.catalog.base.as_deref(),
            },
            log: &self.log,
        };
        toml::to_string_pretty(&view).expect("settings always serialize")
    }
}

/// Where the catalog lives and how its urls are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Absolute path to the catalog JSON file.
    pub path: Option<PathBuf>,
    /// Base url for resolving entry urls; `None` means the catalog's directory.
    pub base: Option<String>,
    /// Config file that defined `path`.
    pub defined_in: Option<PathBuf>,
}

impl CatalogSettings {
    /// Returns true if the catalog path came from the global `~/.folio.toml`.
    pub fn is_global(&self) -> bool {
        self.defined_in.as_deref().is_some_and(is_global_config)
    }
}

/// Diagnostic output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive for diagnostics, e.g. `warn` or `folio_index=debug`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: String::from("warn"),
        }
    }
}

/// Borrowed shape of `folio config` output.
#[derive(Serialize)]
struct EffectiveSettings<'a> {
    /// `[catalog]`
    catalog: EffectiveCatalog<'a>,
    /// `[log]`
    log: &'a LogSettings,
}

/// `[catalog]` with the path made printable.
#[derive(Serialize)]
struct EffectiveCatalog<'a> {
    /// Resolved catalog file.
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    /// Url base, when one is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    base: Option<&'a str>,
}
