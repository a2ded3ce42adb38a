//! Theme and variant tables for Vitrine.
//!
//! This crate provides:
//! - [`ThemeTable`]: named color palettes with CSS-variable accessors
//! - [`VariantTable`]: named visual-style descriptors with role-scoped
//!   class strings
//! - [`StyleTables`]: both tables bundled for dependency injection
//!
//! The subsystem is pure and side-effect-free: unknown or absent names
//! always fall back to `default`, never an error.
//!
//! # Quick Start
//!
//! ```
//! use vitrine_style::StyleTables;
//!
//! let tables = StyleTables::builtin();
//!
//! let theme = tables.theme(Some("ocean"));
//! assert_eq!(theme.background, "#0C4A6E");
//!
//! let variant = tables.variant(Some("no-such-variant"));
//! assert_eq!(variant.name, "default");
//! ```

mod theme;
mod variant;

pub use theme::{Theme, ThemeTable};
pub use variant::{StyleRole, Variant, VariantTable};

/// The theme and variant tables, bundled.
///
/// Constructed once at startup and passed explicitly to consumers; the
/// tables are immutable and safe for concurrent reads.
#[derive(Debug, Default)]
pub struct StyleTables {
    themes: ThemeTable,
    variants: VariantTable,
}

impl StyleTables {
    /// The built-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Look up a theme by name with fallback to `default`.
    #[must_use]
    pub fn theme(&self, name: Option<&str>) -> &'static Theme {
        self.themes.get(name)
    }

    /// Look up a variant by name with fallback to `default`.
    #[must_use]
    pub fn variant(&self, name: Option<&str>) -> &'static Variant {
        self.variants.get(name)
    }

    /// The theme table.
    #[must_use]
    pub const fn themes(&self) -> &ThemeTable {
        &self.themes
    }

    /// The variant table.
    #[must_use]
    pub const fn variants(&self) -> &VariantTable {
        &self.variants
    }
}
