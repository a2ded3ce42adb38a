//! Shared defaults documents.
//!
//! Two optional cross-page documents feed the merge step: shared
//! navigation (header/footer defaults) and shared per-component-type
//! theme/variant assignment. Both degrade to empty on any read or parse
//! failure: navigation and theming are optional, so a broken shared
//! document must never block a page load. The degradation is logged as
//! a warning.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::ComponentEntry;
use crate::source::DocumentSource;

/// Shared navigation defaults: `{ header?, footer? }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedNavigation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ComponentEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<ComponentEntry>,
}

/// Shared theme assignment document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedThemes {
    /// Site-wide default theme/variant, applied as the final fallback
    /// when neither the page nor a per-type assignment sets a style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<GlobalStyleDefaults>,

    /// Per-component-type theme/variant assignment.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub component_themes: HashMap<String, TypeStyleDefaults>,
}

/// Site-wide default theme and variant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyleDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_variant: Option<String>,
}

/// Theme/variant assignment for one component type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeStyleDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl TypeStyleDefaults {
    /// True when the assignment sets neither field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variant.is_none() && self.theme.is_none()
    }
}

/// Load the shared navigation document, degrading to empty.
pub(crate) fn load_navigation(source: &dyn DocumentSource, name: &str) -> SharedNavigation {
    load_degraded(source, name, "shared navigation")
}

/// Load the shared theme-assignment document, degrading to empty.
pub(crate) fn load_themes(source: &dyn DocumentSource, name: &str) -> SharedThemes {
    load_degraded(source, name, "shared themes")
}

fn load_degraded<T: Default + serde::de::DeserializeOwned>(
    source: &dyn DocumentSource,
    name: &str,
    what: &'static str,
) -> T {
    let raw = match source.read(name) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(document = %name, error = %e, "Failed to read {what}, using empty defaults");
            return T::default();
        }
    };

    match serde_yaml::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(document = %name, error = %e, "Malformed {what} document, using empty defaults");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mock::MockSource;

    #[test]
    fn test_load_navigation() {
        let source = MockSource::new().with_document(
            "navigation",
            r"
header:
  type: Header
  config:
    content: { logo: Acme, links: [] }
footer:
  type: Footer
  config:
    content: { logo: Acme, description: D }
",
        );

        let nav = load_navigation(&source, "navigation");
        assert_eq!(
            nav.header.unwrap().component_type,
            Some("Header".to_owned())
        );
        assert_eq!(
            nav.footer.unwrap().component_type,
            Some("Footer".to_owned())
        );
    }

    #[test]
    fn test_missing_navigation_degrades_to_empty() {
        let source = MockSource::new();
        let nav = load_navigation(&source, "navigation");
        assert_eq!(nav, SharedNavigation::default());
    }

    #[test]
    fn test_malformed_navigation_degrades_to_empty() {
        let source = MockSource::new().with_document("navigation", "header: [not a mapping");
        let nav = load_navigation(&source, "navigation");
        assert_eq!(nav, SharedNavigation::default());
    }

    #[test]
    fn test_load_themes() {
        let source = MockSource::new().with_document(
            "theme",
            r"
global:
  defaultTheme: midnight
  defaultVariant: dark
componentThemes:
  Hero: { variant: gradient, theme: ocean }
  Pricing: { theme: forest }
",
        );

        let themes = load_themes(&source, "theme");
        let global = themes.global.unwrap();
        assert_eq!(global.default_theme, Some("midnight".to_owned()));
        assert_eq!(global.default_variant, Some("dark".to_owned()));

        let hero = &themes.component_themes["Hero"];
        assert_eq!(hero.variant, Some("gradient".to_owned()));
        assert_eq!(hero.theme, Some("ocean".to_owned()));

        let pricing = &themes.component_themes["Pricing"];
        assert_eq!(pricing.variant, None);
        assert_eq!(pricing.theme, Some("forest".to_owned()));
    }

    #[test]
    fn test_missing_themes_degrades_to_empty() {
        let source = MockSource::new();
        let themes = load_themes(&source, "theme");
        assert_eq!(themes, SharedThemes::default());
    }

    #[test]
    fn test_malformed_themes_degrades_to_empty() {
        let source = MockSource::new().with_document("theme", ":::");
        let themes = load_themes(&source, "theme");
        assert_eq!(themes, SharedThemes::default());
    }
}
