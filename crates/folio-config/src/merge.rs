//! Configuration merging.
//!
//! Folds a chain of [`ConfigFile`]s into one resolved [`Config`].

use crate::{
    CatalogSettings, Config, ConfigError, LogSettings,
    parse::{ConfigFile, RawCatalog, RawLog},
    resolve::resolve_catalog_path,
};

/// Merges a discovery chain, nearest file first, into one [`Config`].
///
/// Each key takes the value from the nearest file that sets it. A catalog `path` is
/// resolved against the directory of the file that sets it, even when `base` comes from
/// a different file.
pub fn merge_configs(chain: &[ConfigFile]) -> Result<Config, ConfigError> {
    let Some(nearest) = chain.first() else {
        return Ok(Config::default());
    };

    let mut catalog = CatalogSettings::default();
    let mut log = LogSettings::default();
    // Outermost first, so nearer files overwrite.
    for file in chain.iter().rev() {
        if let Some(raw) = &file.raw.catalog {
            apply_catalog(&mut catalog, raw, file)?;
        }
        if let Some(raw) = &file.raw.log {
            apply_log(&mut log, raw);
        }
    }

    Ok(Config {
        catalog,
        log,
        config_root: Some(nearest.dir().to_path_buf()),
    })
}

/// Applies one file's `[catalog]` table.
fn apply_catalog(
    settings: &mut CatalogSettings,
    raw: &RawCatalog,
    file: &ConfigFile,
) -> Result<(), ConfigError> {
    if let Some(path) = &raw.path {
        settings.path = Some(resolve_catalog_path(path, file.dir())?);
        settings.defined_in = Some(file.path.clone());
    }
    if let Some(base) = &raw.base {
        settings.base = Some(base.clone());
    }
    Ok(())
}

/// Applies one file's `[log]` table.
fn apply_log(settings: &mut LogSettings, raw: &RawLog) {
    if let Some(level) = &raw.level {
        settings.level.clone_from(level);
    }
}
