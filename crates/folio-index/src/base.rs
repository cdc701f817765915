//! Url resolution for catalog entries.

use std::path::Path;

use url::Url;

use crate::IndexError;

/// The base every entry url is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    /// Absolute base url.
    base: Url,
}

impl BaseUrl {
    /// Wraps an already-parsed absolute url.
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Parses an absolute base url.
    pub fn parse(base: &str) -> Result<Self, IndexError> {
        Url::parse(base)
            .map(Self::new)
            .map_err(|source| IndexError::InvalidBaseUrl {
                url: base.to_string(),
                source,
            })
    }

    /// Builds a `file://` base for the directory containing `path`.
    ///
    /// Returns `None` if `path` is relative or has no parent.
    pub fn for_file(path: &Path) -> Option<Self> {
        let dir = path.parent()?;
        Url::from_directory_path(dir).ok().map(Self::new)
    }

    /// Returns the underlying base url.
    pub fn as_url(&self) -> &Url {
        &self.base
    }

    /// Resolves `raw` against the base and strips the fragment.
    pub fn canonicalize(&self, raw: &str) -> Result<String, IndexError> {
        let mut resolved = self
            .base
            .join(raw)
            .map_err(|source| IndexError::InvalidUrl {
                url: raw.to_string(),
                source,
            })?;
        resolved.set_fragment(None);
        Ok(resolved.into())
    }
}
