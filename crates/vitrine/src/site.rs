//! Site facade.
//!
//! [`Site`] wires the filesystem sources, the component registry and the
//! style tables together behind one handle. Pages can be loaded one at a
//! time or as a parallel batch; page loads are independent and share
//! only the read-only registry and style tables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use vitrine_config::Config;
use vitrine_page::{ComponentEntry, FsSource, LoadError, PageDocument, PageLoader};
use vitrine_registry::ComponentRegistry;
use vitrine_style::StyleTables;

use crate::style::ResolvedStyle;

/// Error type for site-level operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The pages directory pattern could not be built.
    #[error("invalid pages directory {}: {source}", dir.display())]
    Pattern {
        dir: PathBuf,
        #[source]
        source: glob::PatternError,
    },

    /// A directory entry could not be read while scanning.
    #[error("failed to scan pages directory: {0}")]
    Scan(#[from] glob::GlobError),
}

/// One site: page source, shared defaults, registry and style tables.
pub struct Site {
    loader: PageLoader,
    styles: StyleTables,
    pages_dir: PathBuf,
}

impl Site {
    /// Open a site described by the given configuration.
    #[must_use]
    pub fn open(config: &Config) -> Self {
        let registry = Arc::new(ComponentRegistry::builtin());
        let loader = PageLoader::new(
            Arc::new(FsSource::new(&config.site_resolved.pages_dir)),
            Arc::new(FsSource::new(&config.site_resolved.shared_dir)),
            registry,
        )
        .with_shared_names(config.shared.navigation.clone(), config.shared.themes.clone());

        Self {
            loader,
            styles: StyleTables::builtin(),
            pages_dir: config.site_resolved.pages_dir.clone(),
        }
    }

    /// The component registry.
    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        self.loader.registry()
    }

    /// The style tables.
    #[must_use]
    pub const fn styles(&self) -> &StyleTables {
        &self.styles
    }

    /// Load one page through the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the page cannot be read, parsed or
    /// validated.
    pub fn load_page(&self, name: &str) -> Result<PageDocument, LoadError> {
        self.loader.load(name)
    }

    /// Enumerate page names in the pages directory.
    ///
    /// Scans for `*.yaml` and `*.yml` files; names are file stems,
    /// sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] when the directory cannot be scanned.
    pub fn page_names(&self) -> Result<Vec<String>, SiteError> {
        let mut names = Vec::new();
        for extension in ["yaml", "yml"] {
            let pattern = self.pages_dir.join(format!("*.{extension}"));
            let pattern = pattern.to_string_lossy();
            let paths = glob::glob(&pattern).map_err(|source| SiteError::Pattern {
                dir: self.pages_dir.clone(),
                source,
            })?;
            for path in paths {
                let path = path?;
                if let Some(stem) = path.file_stem() {
                    names.push(stem.to_string_lossy().into_owned());
                }
            }
        }
        names.sort_unstable();
        names.dedup();
        Ok(names)
    }

    /// Load every page in the pages directory, in parallel.
    ///
    /// Page loads are independent; one page failing does not abort the
    /// batch. Results are keyed by page name.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] only when the directory scan itself fails;
    /// per-page failures are reported in the returned map.
    pub fn load_all(&self) -> Result<BTreeMap<String, Result<PageDocument, LoadError>>, SiteError> {
        let names = self.page_names()?;
        Ok(names
            .into_par_iter()
            .map(|name| {
                let result = self.load_page(&name);
                if let Err(e) = &result {
                    tracing::warn!(page = %name, error = %e, "Page failed to load");
                }
                (name, result)
            })
            .collect())
    }

    /// Resolve the effective theme, variant and custom overrides for a
    /// component entry.
    ///
    /// Never fails: absent or unknown names fall back to `default`.
    #[must_use]
    pub fn component_style<'a>(&self, entry: &'a ComponentEntry) -> ResolvedStyle<'a> {
        ResolvedStyle::for_entry(&self.styles, entry)
    }

    /// The pages directory this site reads from.
    #[must_use]
    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }
}
