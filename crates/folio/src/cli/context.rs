//! Shared context for running CLI commands.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use folio_config::Config;
use folio_index::{BaseUrl, Index};
use tracing::debug;

use super::args::CatalogArgs;

/// Where the catalog path in effect came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// The `--catalog` flag.
    Flag,
    /// A `.folio.toml` file.
    Config,
}

/// A catalog file read from disk, not yet parsed.
pub struct CatalogSource {
    /// Absolute path of the catalog file.
    pub path: PathBuf,
    /// Raw JSON text.
    pub text: String,
    /// Base that entry urls are resolved against.
    pub base: BaseUrl,
}

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Command-line catalog overrides.
    overrides: CatalogArgs,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(overrides: CatalogArgs) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            overrides,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only(overrides: CatalogArgs) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            overrides,
        })
    }

    /// Returns the catalog path in effect and its origin, if one is set.
    ///
    /// `--catalog` wins over the configuration and is taken relative to the working
    /// directory.
    pub fn catalog_path(&self) -> Option<(PathBuf, CatalogOrigin)> {
        if let Some(path) = &self.overrides.catalog {
            return Some((self.cwd.join(path), CatalogOrigin::Flag));
        }
        self.config
            .catalog
            .path
            .clone()
            .map(|path| (path, CatalogOrigin::Config))
    }

    /// Returns the explicitly configured base url, if any.
    pub fn base_setting(&self) -> Option<&str> {
        self.overrides
            .base
            .as_deref()
            .or(self.config.catalog.base.as_deref())
    }

    /// Returns true if `--base` was given.
    pub fn base_overridden(&self) -> bool {
        self.overrides.base.is_some()
    }

    /// Ensures a catalog is configured, printing a hint if not.
    pub fn require_catalog(&self) -> Result<PathBuf, ExitCode> {
        self.catalog_path().map(|(path, _)| path).ok_or_else(|| {
            eprintln!("error: no catalog configured");
            eprintln!("Pass --catalog PATH, or run 'folio init' and set [catalog] path.");
            ExitCode::FAILURE
        })
    }

    /// Resolves the base url for a catalog file.
    ///
    /// Without an explicit base, urls resolve against the directory holding the catalog.
    pub fn base_url(&self, catalog: &Path) -> Result<BaseUrl, ExitCode> {
        match self.base_setting() {
            Some(base) => BaseUrl::parse(base).map_err(|e| {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }),
            None => BaseUrl::for_file(catalog).ok_or_else(|| {
                eprintln!(
                    "error: cannot derive a base url from {}; pass --base",
                    catalog.display()
                );
                ExitCode::FAILURE
            }),
        }
    }

    /// Reads the catalog file and resolves its base url.
    pub fn read_catalog(&self) -> Result<CatalogSource, ExitCode> {
        let path = self.require_catalog()?;
        let text = fs::read_to_string(&path).map_err(|e| {
            eprintln!("error: failed to read catalog {}: {e}", path.display());
            ExitCode::FAILURE
        })?;
        let base = self.base_url(&path)?;
        Ok(CatalogSource { path, text, base })
    }

    /// Loads the catalog into an index and builds its flat cache.
    ///
    /// Malformed entries are skipped with a logged warning.
    pub fn index(&self) -> Result<Index, ExitCode> {
        let source = self.read_catalog()?;
        debug!(
            catalog = %source.path.display(),
            base = %source.base.as_url(),
            "loading catalog"
        );
        let mut index = Index::new(source.base);
        index.parse(source.text.as_str());
        index.update();
        Ok(index)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
