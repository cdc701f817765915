//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use tracing_subscriber::EnvFilter;
use url::Url;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No catalog path is configured.
    NoCatalogDefined,
    /// The catalog path does not exist.
    CatalogPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The catalog path exists but is not a file.
    CatalogPathNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// The base url is not an absolute url.
    InvalidBaseUrl {
        /// The configured base.
        url: String,
        /// Parser message.
        reason: String,
    },
    /// The log level is not a valid filter directive.
    InvalidLogLevel {
        /// The configured level.
        level: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCatalogDefined => write!(f, "no catalog is defined in configuration"),
            Self::CatalogPathMissing { path } => {
                write!(f, "catalog path does not exist: {path}")
            }
            Self::CatalogPathNotFile { path } => {
                write!(f, "catalog path is not a file: {path}")
            }
            Self::InvalidBaseUrl { url, reason } => {
                write!(f, "base url '{url}' is invalid: {reason}")
            }
            Self::InvalidLogLevel { level } => {
                write!(f, "log level '{level}' is not a valid filter")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match &config.catalog.path {
        None => warnings.push(ConfigWarning::NoCatalogDefined),
        Some(path) if !path.exists() => warnings.push(ConfigWarning::CatalogPathMissing {
            path: path.display().to_string(),
        }),
        Some(path) if !path.is_file() => warnings.push(ConfigWarning::CatalogPathNotFile {
            path: path.display().to_string(),
        }),
        Some(_) => {}
    }

    if let Some(base) = &config.catalog.base
        && let Err(e) = Url::parse(base)
    {
        warnings.push(ConfigWarning::InvalidBaseUrl {
            url: base.clone(),
            reason: e.to_string(),
        });
    }

    if EnvFilter::try_new(&config.log.level).is_err() {
        warnings.push(ConfigWarning::InvalidLogLevel {
            level: config.log.level.clone(),
        });
    }

    warnings
}
