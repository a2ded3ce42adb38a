//! Shared-defaults merging.
//!
//! Merge precedence is a hard contract: page-level values always win,
//! which also makes the merge idempotent; feeding a merged document
//! back through produces the same result.

use crate::model::{PageDocument, StyleOptions};
use crate::shared::{SharedNavigation, SharedThemes};

/// Fill in header/footer from shared navigation.
///
/// Field-level override, not a deep merge: a page-level `header` or
/// `footer` is kept untouched; only absent fields fall back to the
/// shared entry. If neither exists the field stays absent.
pub(crate) fn apply_shared_navigation(doc: &mut PageDocument, nav: SharedNavigation) {
    if doc.header.is_none() {
        doc.header = nav.header;
    }
    if doc.footer.is_none() {
        doc.footer = nav.footer;
    }
}

/// Apply shared per-type styling and global style defaults.
///
/// For each component entry without an explicit `config.style`, assign
/// the shared `componentThemes` entry for its type when one exists;
/// otherwise fall back to the global default theme/variant. Entries
/// with a page-level style are left untouched. A per-type assignment
/// that sets neither field does not shadow the global defaults.
pub(crate) fn apply_shared_styles(doc: &mut PageDocument, themes: &SharedThemes) {
    let Some(components) = doc.components.as_mut() else {
        return;
    };

    for entry in components {
        let Some(config) = entry.config.as_mut() else {
            continue;
        };
        if config.style.is_some() {
            continue;
        }

        let per_type = entry
            .component_type
            .as_deref()
            .and_then(|t| themes.component_themes.get(t))
            .filter(|defaults| !defaults.is_empty());

        let style = if let Some(defaults) = per_type {
            StyleOptions {
                variant: defaults.variant.clone(),
                theme: defaults.theme.clone(),
                ..Default::default()
            }
        } else if let Some(global) = &themes.global {
            StyleOptions {
                variant: global.default_variant.clone(),
                theme: global.default_theme.clone(),
                ..Default::default()
            }
        } else {
            continue;
        };

        if !style.is_empty() {
            config.style = Some(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ComponentConfig, ComponentEntry};
    use crate::shared::{GlobalStyleDefaults, TypeStyleDefaults};

    fn entry(component_type: &str) -> ComponentEntry {
        ComponentEntry {
            component_type: Some(component_type.to_owned()),
            config: Some(ComponentConfig::default()),
            ..Default::default()
        }
    }

    fn styled_entry(component_type: &str, theme: &str) -> ComponentEntry {
        ComponentEntry {
            component_type: Some(component_type.to_owned()),
            config: Some(ComponentConfig {
                style: Some(StyleOptions {
                    theme: Some(theme.to_owned()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_navigation_fills_absent_header() {
        let mut doc = PageDocument::default();
        let nav = SharedNavigation {
            header: Some(entry("Header")),
            footer: Some(entry("Footer")),
        };

        apply_shared_navigation(&mut doc, nav);

        assert_eq!(
            doc.header.unwrap().component_type,
            Some("Header".to_owned())
        );
        assert_eq!(
            doc.footer.unwrap().component_type,
            Some("Footer".to_owned())
        );
    }

    #[test]
    fn test_navigation_page_header_wins() {
        let mut doc = PageDocument {
            header: Some(styled_entry("Header", "midnight")),
            ..Default::default()
        };
        let nav = SharedNavigation {
            header: Some(entry("Header")),
            footer: None,
        };

        apply_shared_navigation(&mut doc, nav);

        // The page's own header is untouched; no footer appears.
        let header = doc.header.unwrap();
        assert!(header.config.unwrap().style.is_some());
        assert!(doc.footer.is_none());
    }

    #[test]
    fn test_navigation_absent_everywhere_stays_absent() {
        let mut doc = PageDocument::default();
        apply_shared_navigation(&mut doc, SharedNavigation::default());
        assert!(doc.header.is_none());
        assert!(doc.footer.is_none());
    }

    #[test]
    fn test_per_type_style_applied_when_absent() {
        let mut doc = PageDocument {
            components: Some(vec![entry("Hero")]),
            ..Default::default()
        };
        let themes = SharedThemes {
            component_themes: HashMap::from([(
                "Hero".to_owned(),
                TypeStyleDefaults {
                    variant: Some("dark".to_owned()),
                    theme: Some("forest".to_owned()),
                },
            )]),
            ..Default::default()
        };

        apply_shared_styles(&mut doc, &themes);

        let style = doc.components.unwrap()[0]
            .config
            .clone()
            .unwrap()
            .style
            .unwrap();
        assert_eq!(style.variant, Some("dark".to_owned()));
        assert_eq!(style.theme, Some("forest".to_owned()));
    }

    #[test]
    fn test_page_style_left_untouched() {
        let mut doc = PageDocument {
            components: Some(vec![styled_entry("Hero", "lavender")]),
            ..Default::default()
        };
        let themes = SharedThemes {
            component_themes: HashMap::from([(
                "Hero".to_owned(),
                TypeStyleDefaults {
                    variant: Some("dark".to_owned()),
                    theme: Some("forest".to_owned()),
                },
            )]),
            ..Default::default()
        };

        apply_shared_styles(&mut doc, &themes);

        let style = doc.components.unwrap()[0]
            .config
            .clone()
            .unwrap()
            .style
            .unwrap();
        assert_eq!(style.theme, Some("lavender".to_owned()));
        assert_eq!(style.variant, None);
    }

    #[test]
    fn test_global_defaults_are_final_fallback() {
        let mut doc = PageDocument {
            components: Some(vec![entry("Stats")]),
            ..Default::default()
        };
        let themes = SharedThemes {
            global: Some(GlobalStyleDefaults {
                default_theme: Some("midnight".to_owned()),
                default_variant: None,
            }),
            component_themes: HashMap::from([(
                "Hero".to_owned(),
                TypeStyleDefaults {
                    theme: Some("ocean".to_owned()),
                    variant: None,
                },
            )]),
        };

        apply_shared_styles(&mut doc, &themes);

        let style = doc.components.unwrap()[0]
            .config
            .clone()
            .unwrap()
            .style
            .unwrap();
        assert_eq!(style.theme, Some("midnight".to_owned()));
    }

    #[test]
    fn test_empty_per_type_entry_does_not_shadow_global() {
        let mut doc = PageDocument {
            components: Some(vec![entry("Stats")]),
            ..Default::default()
        };
        let themes = SharedThemes {
            global: Some(GlobalStyleDefaults {
                default_theme: Some("midnight".to_owned()),
                default_variant: None,
            }),
            component_themes: HashMap::from([(
                "Stats".to_owned(),
                TypeStyleDefaults::default(),
            )]),
        };

        apply_shared_styles(&mut doc, &themes);

        let style = doc.components.unwrap()[0]
            .config
            .clone()
            .unwrap()
            .style
            .unwrap();
        assert_eq!(style.theme, Some("midnight".to_owned()));
    }

    #[test]
    fn test_no_shared_style_leaves_entry_unstyled() {
        let mut doc = PageDocument {
            components: Some(vec![entry("Stats")]),
            ..Default::default()
        };

        apply_shared_styles(&mut doc, &SharedThemes::default());

        assert!(doc.components.unwrap()[0].config.clone().unwrap().style.is_none());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let nav = SharedNavigation {
            header: Some(entry("Header")),
            footer: Some(entry("Footer")),
        };
        let themes = SharedThemes {
            global: Some(GlobalStyleDefaults {
                default_theme: Some("ocean".to_owned()),
                default_variant: Some("light".to_owned()),
            }),
            component_themes: HashMap::from([(
                "Hero".to_owned(),
                TypeStyleDefaults {
                    variant: Some("dark".to_owned()),
                    theme: None,
                },
            )]),
        };

        let mut doc = PageDocument {
            components: Some(vec![entry("Hero"), entry("Stats")]),
            ..Default::default()
        };

        apply_shared_navigation(&mut doc, nav.clone());
        apply_shared_styles(&mut doc, &themes);
        let once = doc.clone();

        apply_shared_navigation(&mut doc, nav);
        apply_shared_styles(&mut doc, &themes);

        assert_eq!(doc, once);
    }
}
