//! Page document loading, merging and validation for Vitrine.
//!
//! This crate provides:
//! - [`PageDocument`] and friends: the lenient page model
//! - [`DocumentSource`]: read access to named YAML documents
//!   ([`FsSource`] for the filesystem, [`mock::MockSource`] for tests)
//! - [`SharedNavigation`] / [`SharedThemes`]: optional cross-page
//!   defaults, tolerant of absence or corruption
//! - [`PageLoader`]: the load → merge → validate pipeline
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use vitrine_page::{FsSource, PageLoader};
//! use vitrine_registry::ComponentRegistry;
//!
//! let loader = PageLoader::new(
//!     Arc::new(FsSource::new("pages")),
//!     Arc::new(FsSource::new("shared")),
//!     Arc::new(ComponentRegistry::builtin()),
//! );
//!
//! let doc = loader.load("home")?;
//! for entry in doc.enabled_components() {
//!     // hand to the renderer
//! }
//! # Ok(())
//! # }
//! ```

mod loader;
pub(crate) mod merge;
mod model;
pub(crate) mod shared;
mod source;
mod validate;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use loader::{LoadError, NAVIGATION_DOCUMENT, PageLoader, THEMES_DOCUMENT};
pub use model::{
    Alignment, Columns, ColumnsKeyword, ComponentConfig, ComponentEntry, ContainerWidth,
    LayoutOptions, PageDocument, PageLayout, PageMeta, Spacing, StyleOptions,
};
pub use shared::{GlobalStyleDefaults, SharedNavigation, SharedThemes, TypeStyleDefaults};
pub use source::{DocumentSource, FsSource, SourceError};
pub use validate::ValidationError;
