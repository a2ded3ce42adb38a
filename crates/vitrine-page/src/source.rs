//! Document source abstraction.
//!
//! Pages and shared documents are read through [`DocumentSource`] so the
//! loader can be tested without a filesystem. Names are document names
//! (e.g., `"home"`), not file paths; [`FsSource`] maps them to
//! `<dir>/<name>.yaml`, falling back to `.yml`.

use std::path::{Path, PathBuf};

/// Error type for document reads.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No document exists under the given name.
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The document exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// True for the not-found case.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Read access to named YAML documents.
pub trait DocumentSource: Send + Sync {
    /// Read the document with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotFound`] when no document exists under
    /// `name`, or [`SourceError::Io`] when the read fails.
    fn read(&self, name: &str) -> Result<String, SourceError>;

    /// Check whether a document exists under `name`.
    fn exists(&self, name: &str) -> bool;
}

/// Filesystem-backed document source rooted at one directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    dir: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The root directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a document name to the file that holds it.
    ///
    /// Prefers `<name>.yaml`; falls back to `<name>.yml` when only that
    /// exists. Returns the `.yaml` path when neither exists so the
    /// not-found error names the conventional location.
    fn path_for(&self, name: &str) -> PathBuf {
        let yaml = self.dir.join(format!("{name}.yaml"));
        if yaml.exists() {
            return yaml;
        }
        let yml = self.dir.join(format!("{name}.yml"));
        if yml.exists() { yml } else { yaml }
    }
}

impl DocumentSource for FsSource {
    fn read(&self, name: &str) -> Result<String, SourceError> {
        let path = self.path_for(name);
        if !path.exists() {
            return Err(SourceError::NotFound(path));
        }
        std::fs::read_to_string(&path).map_err(|source| SourceError::Io { path, source })
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }
}
