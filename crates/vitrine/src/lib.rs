//! YAML-driven landing page composition.
//!
//! This crate ties the Vitrine pieces together behind a single handle:
//! - [`Site`]: page loading (single or parallel batch) over a configured
//!   directory layout
//! - [`ResolvedStyle`]: per-entry theme/variant/override resolution for
//!   the renderer
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use vitrine::Site;
//! use vitrine_config::Config;
//!
//! let config = Config::load(None)?;
//! let site = Site::open(&config);
//!
//! let doc = site.load_page("home")?;
//! for entry in doc.enabled_components() {
//!     let style = site.component_style(entry);
//!     let _background = style.background();
//! }
//! # Ok(())
//! # }
//! ```

mod site;
mod style;

pub use site::{Site, SiteError};
pub use style::ResolvedStyle;

// Re-export the pieces consumers typically need alongside `Site`.
pub use vitrine_config::Config;
pub use vitrine_page::{LoadError, PageDocument, ValidationError};
pub use vitrine_registry::{ComponentContent, ComponentKind, ComponentRegistry};
pub use vitrine_style::{StyleRole, Theme, Variant};
