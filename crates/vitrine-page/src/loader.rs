//! The page loading pipeline.
//!
//! [`PageLoader`] produces one fully resolved, validated
//! [`PageDocument`] per page name: read and parse the page's own
//! document, merge shared navigation and shared per-type styling
//! (page-level values always win), then validate the merged result.
//! Validation failures are fatal for the page; a partially valid
//! document is never returned.

use std::sync::Arc;

use vitrine_registry::ComponentRegistry;

use crate::model::PageDocument;
use crate::source::{DocumentSource, SourceError};
use crate::validate::{self, ValidationError};
use crate::{merge, shared};

/// Default document name for shared navigation.
pub const NAVIGATION_DOCUMENT: &str = "navigation";

/// Default document name for shared theme assignment.
pub const THEMES_DOCUMENT: &str = "theme";

/// Error type for page loads.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The page's own document does not exist.
    #[error("page '{page}' not found: {source}")]
    NotFound {
        page: String,
        #[source]
        source: SourceError,
    },

    /// The page's own document exists but could not be read.
    #[error("failed to read page '{page}': {source}")]
    Read {
        page: String,
        #[source]
        source: SourceError,
    },

    /// The page's own document is not valid YAML for the page model.
    #[error("failed to parse page '{page}': {source}")]
    Parse {
        page: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The merged document violates a structural rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Loads, merges and validates page documents.
pub struct PageLoader {
    pages: Arc<dyn DocumentSource>,
    shared: Arc<dyn DocumentSource>,
    registry: Arc<ComponentRegistry>,
    navigation_doc: String,
    themes_doc: String,
}

impl PageLoader {
    /// Create a loader over the given page and shared-document sources.
    ///
    /// Shared documents are looked up under the default names
    /// [`NAVIGATION_DOCUMENT`] and [`THEMES_DOCUMENT`]; override them
    /// with [`PageLoader::with_shared_names`].
    pub fn new(
        pages: Arc<dyn DocumentSource>,
        shared: Arc<dyn DocumentSource>,
        registry: Arc<ComponentRegistry>,
    ) -> Self {
        Self {
            pages,
            shared,
            registry,
            navigation_doc: NAVIGATION_DOCUMENT.to_owned(),
            themes_doc: THEMES_DOCUMENT.to_owned(),
        }
    }

    /// Override the shared document names.
    #[must_use]
    pub fn with_shared_names(
        mut self,
        navigation: impl Into<String>,
        themes: impl Into<String>,
    ) -> Self {
        self.navigation_doc = navigation.into();
        self.themes_doc = themes.into();
        self
    }

    /// The registry this loader validates against.
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Load one page through the full pipeline.
    ///
    /// Shared documents are re-read on every call; they are optional and
    /// tolerate absence or corruption (degrading to empty defaults with
    /// a warning). The page's own document does not.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`]/[`LoadError::Read`] when the page
    /// document cannot be read, [`LoadError::Parse`] when it is not
    /// valid YAML, or [`LoadError::Validation`] when the merged document
    /// violates a structural rule.
    pub fn load(&self, page: &str) -> Result<PageDocument, LoadError> {
        let raw = self.pages.read(page).map_err(|source| {
            if source.is_not_found() {
                LoadError::NotFound {
                    page: page.to_owned(),
                    source,
                }
            } else {
                LoadError::Read {
                    page: page.to_owned(),
                    source,
                }
            }
        })?;

        let value: serde_yaml::Value = serde_yaml::from_str(&raw).map_err(|source| {
            LoadError::Parse {
                page: page.to_owned(),
                source,
            }
        })?;

        // `components` holding the wrong shape is a structural failure,
        // not a parse failure; classify it before the typed parse would
        // reject it.
        if let Some(components) = value.get("components") {
            if !components.is_sequence() && !components.is_null() {
                return Err(ValidationError::ComponentsNotASequence {
                    page: page.to_owned(),
                }
                .into());
            }
        }

        let mut doc: PageDocument = serde_yaml::from_value(value).map_err(|source| {
            LoadError::Parse {
                page: page.to_owned(),
                source,
            }
        })?;

        let nav = shared::load_navigation(self.shared.as_ref(), &self.navigation_doc);
        let themes = shared::load_themes(self.shared.as_ref(), &self.themes_doc);

        merge::apply_shared_navigation(&mut doc, nav);
        merge::apply_shared_styles(&mut doc, &themes);

        validate::validate(page, &doc, &self.registry)?;

        Ok(doc)
    }
}
