//! Turning a configured catalog path into an absolute one.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a `[catalog] path` written in a file that lives in `config_dir`.
///
/// `~/` is expanded to the home directory and relative paths are joined onto
/// `config_dir`. When the target exists it is canonicalized; a missing catalog is left
/// as is, so `folio status` can still show where it is expected.
pub fn resolve_catalog_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let path = expand_tilde(path)?;
    let joined = config_dir.join(path);
    Ok(joined.canonicalize().unwrap_or(joined))
}

/// Expands a leading `~` or `~/` to the home directory; other paths pass through.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    let under_home = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };
    let Some(rest) = under_home else {
        return Ok(PathBuf::from(path));
    };
    let dirs = BaseDirs::new().ok_or_else(|| ConfigError::NoHome {
        path: path.to_string(),
    })?;
    Ok(dirs.home_dir().join(rest))
}
