//! Scratch directory trees for unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A throwaway directory tree holding catalogs and `.folio.toml` files.
pub struct Library {
    /// Removed on drop.
    dir: TempDir,
}

impl Library {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Top of the tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `rel` and any missing parents.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes an empty JSON catalog at `rel`.
    pub fn catalog(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "[]").unwrap();
        path
    }

    /// Writes `.folio.toml` into directory `rel` ("" for the top).
    pub fn config(&self, rel: &str, toml: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, toml).unwrap();
        path
    }
}
