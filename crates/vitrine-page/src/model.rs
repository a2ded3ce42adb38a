//! Page document model.
//!
//! Page documents are deserialized leniently: fields that the
//! specification requires are still `Option` in the model so that
//! structural validation (not serde) reports the missing field with the
//! page name and index. Per-type content stays a raw
//! [`serde_yaml::Value`] until the validator checks it against the
//! registry's schema for the entry's type.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration for one page.
///
/// Immutable input merged in place with shared defaults to produce one
/// fully resolved document, consumed once by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    /// Page metadata. Required; validated after merging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,

    /// Page-level layout hints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<PageLayout>,

    /// Header component. Falls back to shared navigation when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ComponentEntry>,

    /// Ordered component sequence. Order is rendering order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ComponentEntry>>,

    /// Footer component. Falls back to shared navigation when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<ComponentEntry>,
}

impl PageDocument {
    /// Components that will actually render.
    ///
    /// Filtering out soft-disabled entries happens only here, at the
    /// render boundary; disabled entries stay in the document and are
    /// validated like any other.
    pub fn enabled_components(&self) -> impl Iterator<Item = &ComponentEntry> {
        self.components
            .iter()
            .flatten()
            .filter(|entry| entry.enabled)
    }
}

/// Page metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Language tag. Defaults to `en` via [`PageMeta::lang`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Character-set tag. Defaults to `UTF-8` via [`PageMeta::charset`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,

    /// Free-form structured data (e.g., JSON-LD) passed through to the
    /// renderer untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<serde_json::Value>,
}

impl PageMeta {
    /// The language tag, defaulting to `en`.
    #[must_use]
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or("en")
    }

    /// The character-set tag, defaulting to `UTF-8`.
    #[must_use]
    pub fn charset(&self) -> &str {
        self.charset.as_deref().unwrap_or("UTF-8")
    }
}

/// Page-level layout hints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerWidth>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// One placed component instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Component type name; must be registered. `Option` so validation
    /// can report its absence per index.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,

    /// DOM/anchor identifier. Uniqueness is conventional, not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Soft disable: `false` excludes the entry from rendering while
    /// keeping its configuration in the document.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ComponentConfig>,
}

impl Default for ComponentEntry {
    fn default() -> Self {
        Self {
            component_type: None,
            id: None,
            enabled: true,
            config: None,
        }
    }
}

const fn default_enabled() -> bool {
    true
}

/// Per-entry configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleOptions>,

    /// Per-type content, validated against the registry schema for the
    /// entry's type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_yaml::Value>,
}

/// Per-entry layout options.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Columns>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerWidth>,
}

/// Per-entry style options.
///
/// `variant` and `theme` stay strings here: the style tables resolve
/// unknown names to `default` at render time, so unknown names are not
/// a validation failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Free-form string-keyed overrides (background/text/border/accent
    /// color or image). Appended at render time, never validated.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_styles: HashMap<String, String>,
}

impl StyleOptions {
    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variant.is_none() && self.theme.is_none() && self.custom_styles.is_empty()
    }
}

/// Vertical spacing between a component and its neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    None,
    Small,
    Medium,
    Large,
    Xl,
}

/// Column count, either a number or `auto`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Columns {
    Count(u32),
    Keyword(ColumnsKeyword),
}

/// The only keyword value accepted for `columns`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnsKeyword {
    Auto,
}

impl Columns {
    /// True for the `auto` keyword.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Keyword(ColumnsKeyword::Auto))
    }
}

/// Horizontal alignment of a component's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Container width for a page or component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerWidth {
    Full,
    Wide,
    Normal,
    Narrow,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let yaml = r"
meta:
  title: Home
  description: Landing page
components: []
";
        let doc: PageDocument = serde_yaml::from_str(yaml).unwrap();
        let meta = doc.meta.unwrap();
        assert_eq!(meta.title, Some("Home".to_owned()));
        assert_eq!(meta.lang(), "en");
        assert_eq!(meta.charset(), "UTF-8");
        assert_eq!(doc.components, Some(Vec::new()));
        assert!(doc.header.is_none());
        assert!(doc.footer.is_none());
    }

    #[test]
    fn test_parse_entry_defaults_enabled() {
        let yaml = r"
type: Hero
config:
  content: {}
";
        let entry: ComponentEntry = serde_yaml::from_str(yaml).unwrap();
        assert!(entry.enabled);
        assert_eq!(entry.component_type, Some("Hero".to_owned()));
        assert!(entry.id.is_none());
    }

    #[test]
    fn test_parse_entry_soft_disabled() {
        let yaml = r"
type: Stats
enabled: false
config:
  content: { stats: [] }
";
        let entry: ComponentEntry = serde_yaml::from_str(yaml).unwrap();
        assert!(!entry.enabled);
        // Configuration is retained, not deleted.
        assert!(entry.config.is_some());
    }

    #[test]
    fn test_enabled_components_filters_at_render_boundary() {
        let doc = PageDocument {
            components: Some(vec![
                ComponentEntry {
                    component_type: Some("Hero".to_owned()),
                    ..Default::default()
                },
                ComponentEntry {
                    component_type: Some("Stats".to_owned()),
                    enabled: false,
                    ..Default::default()
                },
                ComponentEntry {
                    component_type: Some("Footer".to_owned()),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };

        let types: Vec<_> = doc
            .enabled_components()
            .filter_map(|e| e.component_type.as_deref())
            .collect();
        assert_eq!(types, vec!["Hero", "Footer"]);
        // The disabled entry is still in the document.
        assert_eq!(doc.components.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_parse_layout_options() {
        let yaml = r"
spacing: large
columns: 3
alignment: center
container: wide
";
        let layout: LayoutOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(layout.spacing, Some(Spacing::Large));
        assert_eq!(layout.columns, Some(Columns::Count(3)));
        assert_eq!(layout.alignment, Some(Alignment::Center));
        assert_eq!(layout.container, Some(ContainerWidth::Wide));
    }

    #[test]
    fn test_parse_columns_auto() {
        let layout: LayoutOptions = serde_yaml::from_str("columns: auto").unwrap();
        assert!(layout.columns.unwrap().is_auto());
    }

    #[test]
    fn test_parse_style_options_camel_case() {
        let yaml = r"
variant: dark
theme: forest
customStyles:
  background: '#123456'
";
        let style: StyleOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(style.variant, Some("dark".to_owned()));
        assert_eq!(style.theme, Some("forest".to_owned()));
        assert_eq!(
            style.custom_styles.get("background"),
            Some(&"#123456".to_owned())
        );
        assert!(!style.is_empty());
    }

    #[test]
    fn test_style_options_is_empty() {
        assert!(StyleOptions::default().is_empty());
    }

    #[test]
    fn test_parse_meta_structured_data() {
        let yaml = r#"
title: Home
description: D
structuredData:
  "@type": Organization
  name: Acme
"#;
        let meta: PageMeta = serde_yaml::from_str(yaml).unwrap();
        let data = meta.structured_data.unwrap();
        assert_eq!(data["name"], serde_json::json!("Acme"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let yaml = r"
meta: { title: T, description: D }
components: []
futureField: whatever
";
        let doc: PageDocument = serde_yaml::from_str(yaml).unwrap();
        assert!(doc.meta.is_some());
    }

    #[test]
    fn test_roundtrip_preserves_document() {
        let yaml = r"
meta: { title: T, description: D }
components:
  - type: Hero
    id: hero
    config:
      style: { theme: ocean }
      content: { title: A }
";
        let doc: PageDocument = serde_yaml::from_str(yaml).unwrap();
        let serialized = serde_yaml::to_string(&doc).unwrap();
        let reparsed: PageDocument = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(doc, reparsed);
    }
}
