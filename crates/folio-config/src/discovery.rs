//! Locating `.folio.toml` files.
//!
//! Every directory from the working directory up to the filesystem root may hold a
//! `.folio.toml`; the one in the home directory doubles as the global config.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// Name of every folio config file, local or global.
pub const CONFIG_FILENAME: &str = ".folio.toml";

/// Returns the config files that apply in `cwd`, most specific first.
///
/// A file with `root = true` ends the chain: nothing above it is read, and the global
/// `~/.folio.toml` is left out too. Otherwise the global file comes last, unless the
/// upward walk already passed through the home directory.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut chain = Vec::new();
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        chain.push(candidate);
        if stop {
            return chain;
        }
    }

    if let Some(global) = global_config_path()
        && global.is_file()
        && !chain.contains(&global)
    {
        chain.push(global);
    }
    chain
}

/// Returns `~/.folio.toml`, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    Some(dirs.home_dir().join(CONFIG_FILENAME))
}

/// Returns true if `path` is `~/.folio.toml`.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| global == path)
}
