//! Mock document source for testing.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::source::{DocumentSource, SourceError};

/// In-memory document source.
///
/// Use the builder methods to configure the mock with test documents.
///
/// # Example
///
/// ```ignore
/// use vitrine_page::mock::MockSource;
/// use vitrine_page::DocumentSource;
///
/// let source = MockSource::new().with_document("home", "meta: {}");
/// assert!(source.exists("home"));
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    documents: HashMap<String, String>,
}

impl MockSource {
    /// Create an empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document under the given name.
    #[must_use]
    pub fn with_document(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.documents.insert(name.into(), content.into());
        self
    }
}

impl DocumentSource for MockSource {
    fn read(&self, name: &str) -> Result<String, SourceError> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(PathBuf::from(format!("{name}.yaml"))))
    }

    fn exists(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }
}
