//! Per-entry style resolution.
//!
//! Combines the style tables with an entry's `config.style` into the
//! concrete values a renderer needs: theme palette, variant classes and
//! the entry's custom overrides. Resolution never fails; unknown names
//! fall back to `default`.

use std::collections::HashMap;

use vitrine_page::ComponentEntry;
use vitrine_style::{StyleRole, StyleTables, Theme, Variant};

/// The effective style for one component entry.
#[derive(Debug)]
pub struct ResolvedStyle<'a> {
    theme: &'static Theme,
    variant: &'static Variant,
    custom: Option<&'a HashMap<String, String>>,
}

const fn role_key(role: StyleRole) -> &'static str {
    match role {
        StyleRole::Container => "container",
        StyleRole::Text => "text",
        StyleRole::Heading => "heading",
        StyleRole::Button => "button",
        StyleRole::Card => "card",
        StyleRole::Border => "border",
    }
}

impl<'a> ResolvedStyle<'a> {
    /// Resolve the style for an entry against the tables.
    #[must_use]
    pub fn for_entry(tables: &StyleTables, entry: &'a ComponentEntry) -> Self {
        let style = entry.config.as_ref().and_then(|c| c.style.as_ref());
        Self {
            theme: tables.theme(style.and_then(|s| s.theme.as_deref())),
            variant: tables.variant(style.and_then(|s| s.variant.as_deref())),
            custom: style.map(|s| &s.custom_styles),
        }
    }

    /// The resolved theme palette.
    #[must_use]
    pub const fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// The resolved variant descriptor.
    #[must_use]
    pub const fn variant(&self) -> &'static Variant {
        self.variant
    }

    fn custom_value(&self, key: &str) -> Option<&'a str> {
        self.custom.and_then(|c| c.get(key)).map(String::as_str)
    }

    /// The background expression: a custom `background` override wins,
    /// then the theme's gradient, then its solid color.
    #[must_use]
    pub fn background(&self) -> &str {
        self.custom_value("background")
            .unwrap_or_else(|| self.theme.background_value())
    }

    /// Role-scoped class string, with the entry's custom override for
    /// that role appended when present.
    #[must_use]
    pub fn class_for(&self, role: StyleRole) -> String {
        self.variant.class_for(role, self.custom_value(role_key(role)))
    }

    /// Flat CSS-variable map: the theme's variables with the entry's
    /// custom color overrides applied on top.
    ///
    /// Custom keys are taken as `--color-<key>` properties unless they
    /// already start with `--`.
    #[must_use]
    pub fn css_vars(&self) -> Vec<(String, String)> {
        let mut vars: Vec<(String, String)> = self
            .theme
            .css_vars()
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();

        if let Some(custom) = self.custom {
            let mut overrides: Vec<(&String, &String)> = custom.iter().collect();
            overrides.sort_unstable();
            for (key, value) in overrides {
                let property = if key.starts_with("--") {
                    key.clone()
                } else {
                    format!("--color-{key}")
                };
                match vars.iter_mut().find(|(k, _)| *k == property) {
                    Some(existing) => existing.1.clone_from(value),
                    None => vars.push((property, value.clone())),
                }
            }
        }

        vars
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vitrine_page::{ComponentConfig, StyleOptions};

    use super::*;

    fn entry_with_style(style: Option<StyleOptions>) -> ComponentEntry {
        ComponentEntry {
            component_type: Some("Hero".to_owned()),
            config: Some(ComponentConfig {
                style,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_unstyled_entry_resolves_to_defaults() {
        let tables = StyleTables::builtin();
        let entry = entry_with_style(None);

        let resolved = ResolvedStyle::for_entry(&tables, &entry);
        assert_eq!(resolved.theme().name, "default");
        assert_eq!(resolved.variant().name, "default");
        assert_eq!(resolved.background(), "#FFFFFF");
    }

    #[test]
    fn test_styled_entry() {
        let tables = StyleTables::builtin();
        let entry = entry_with_style(Some(StyleOptions {
            theme: Some("ocean".to_owned()),
            variant: Some("dark".to_owned()),
            ..Default::default()
        }));

        let resolved = ResolvedStyle::for_entry(&tables, &entry);
        assert_eq!(resolved.theme().name, "ocean");
        assert_eq!(resolved.variant().name, "dark");
        assert!(resolved.background().starts_with("linear-gradient"));
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let tables = StyleTables::builtin();
        let entry = entry_with_style(Some(StyleOptions {
            theme: Some("nope".to_owned()),
            variant: Some("nope".to_owned()),
            ..Default::default()
        }));

        let resolved = ResolvedStyle::for_entry(&tables, &entry);
        assert_eq!(resolved.theme().name, "default");
        assert_eq!(resolved.variant().name, "default");
    }

    #[test]
    fn test_custom_background_wins() {
        let tables = StyleTables::builtin();
        let entry = entry_with_style(Some(StyleOptions {
            theme: Some("ocean".to_owned()),
            custom_styles: HashMap::from([(
                "background".to_owned(),
                "url(/hero.png)".to_owned(),
            )]),
            ..Default::default()
        }));

        let resolved = ResolvedStyle::for_entry(&tables, &entry);
        assert_eq!(resolved.background(), "url(/hero.png)");
    }

    #[test]
    fn test_class_for_appends_role_override() {
        let tables = StyleTables::builtin();
        let entry = entry_with_style(Some(StyleOptions {
            custom_styles: HashMap::from([("button".to_owned(), "rounded-full".to_owned())]),
            ..Default::default()
        }));

        let resolved = ResolvedStyle::for_entry(&tables, &entry);
        assert!(resolved.class_for(StyleRole::Button).ends_with("rounded-full"));
        assert_eq!(resolved.class_for(StyleRole::Card), "bg-white shadow-sm");
    }

    #[test]
    fn test_css_vars_overridden_by_custom() {
        let tables = StyleTables::builtin();
        let entry = entry_with_style(Some(StyleOptions {
            custom_styles: HashMap::from([
                ("text".to_owned(), "#FF0000".to_owned()),
                ("--spacing-section".to_owned(), "4rem".to_owned()),
            ]),
            ..Default::default()
        }));

        let resolved = ResolvedStyle::for_entry(&tables, &entry);
        let vars = resolved.css_vars();

        let text = vars.iter().find(|(k, _)| k == "--color-text").unwrap();
        assert_eq!(text.1, "#FF0000");
        assert!(vars.iter().any(|(k, v)| k == "--spacing-section" && v == "4rem"));
        // Existing keys are overridden in place, not duplicated.
        assert_eq!(vars.iter().filter(|(k, _)| k == "--color-text").count(), 1);
    }
}
