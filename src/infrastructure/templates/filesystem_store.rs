//! Filesystem-based template store
//!
//! Resolves source names relative to a root directory, typically the
//! current directory or the one given with `--dir`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::core::templates::TemplateStore;

/// Template store backed by files in a single directory
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    root: PathBuf,
}

impl FileSystemStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the source called `name`
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Default for FileSystemStore {
    fn default() -> Self {
        Self::new(".")
    }
}

impl TemplateStore for FileSystemStore {
    fn read(&self, name: &str) -> io::Result<Option<String>> {
        let path = self.path_for(name);
        debug!(path = %path.display(), "Reading template source");

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn create(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.path_for(name);

        // Staged beside the target; the target only appears once fully written
        let mut staged = NamedTempFile::new_in(&self.root)?;
        staged.write_all(contents.as_bytes())?;
        staged.flush()?;

        staged.persist_noclobber(&path).map_err(|e| match e.error.kind() {
            io::ErrorKind::AlreadyExists => Error::already_exists(path.display().to_string()),
            _ => Error::Io(e.error),
        })?;

        debug!(path = %path.display(), bytes = contents.len(), "Wrote template source");
        Ok(())
    }
}
