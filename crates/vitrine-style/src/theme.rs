//! Named color palettes.
//!
//! Six fixed themes plus the implicit `default`. Lookup never fails:
//! unknown or absent names fall back to the default palette.

use serde::Serialize;

/// A named color palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Canonical theme name.
    pub name: &'static str,
    /// Solid background color.
    pub background: &'static str,
    /// Background gradient, preferred over the solid color when present.
    pub gradient: Option<&'static str>,
    /// Primary text color.
    pub text: &'static str,
    /// Secondary text color.
    pub text_secondary: &'static str,
    /// Accent color.
    pub accent: &'static str,
    /// Accent hover color.
    pub accent_hover: &'static str,
    /// Border color.
    pub border: &'static str,
    /// Card background, when the theme defines one.
    pub card_background: Option<&'static str>,
}

impl Theme {
    /// The background expression, preferring the gradient when both exist.
    #[must_use]
    pub fn background_value(&self) -> &'static str {
        self.gradient.unwrap_or(self.background)
    }

    /// Flat key/value map for CSS-variable injection.
    ///
    /// Keys are CSS custom property names; entries without a value
    /// (gradient, card background) are omitted.
    #[must_use]
    pub fn css_vars(&self) -> Vec<(&'static str, &'static str)> {
        let mut vars = vec![
            ("--color-background", self.background),
            ("--color-text", self.text),
            ("--color-text-secondary", self.text_secondary),
            ("--color-accent", self.accent),
            ("--color-accent-hover", self.accent_hover),
            ("--color-border", self.border),
        ];
        if let Some(gradient) = self.gradient {
            vars.push(("--gradient-background", gradient));
        }
        if let Some(card) = self.card_background {
            vars.push(("--color-card", card));
        }
        vars
    }
}

const DEFAULT: Theme = Theme {
    name: "default",
    background: "#FFFFFF",
    gradient: None,
    text: "#111827",
    text_secondary: "#6B7280",
    accent: "#2563EB",
    accent_hover: "#1D4ED8",
    border: "#E5E7EB",
    card_background: None,
};

const OCEAN: Theme = Theme {
    name: "ocean",
    background: "#0C4A6E",
    gradient: Some("linear-gradient(135deg, #0C4A6E 0%, #0369A1 100%)"),
    text: "#F0F9FF",
    text_secondary: "#BAE6FD",
    accent: "#38BDF8",
    accent_hover: "#7DD3FC",
    border: "#075985",
    card_background: Some("#0E5A85"),
};

const SUNSET: Theme = Theme {
    name: "sunset",
    background: "#7C2D12",
    gradient: Some("linear-gradient(135deg, #7C2D12 0%, #C2410C 100%)"),
    text: "#FFF7ED",
    text_secondary: "#FED7AA",
    accent: "#FB923C",
    accent_hover: "#FDBA74",
    border: "#9A3412",
    card_background: Some("#8C3A1D"),
};

const FOREST: Theme = Theme {
    name: "forest",
    background: "#14532D",
    gradient: Some("linear-gradient(135deg, #14532D 0%, #166534 100%)"),
    text: "#F0FDF4",
    text_secondary: "#BBF7D0",
    accent: "#4ADE80",
    accent_hover: "#86EFAC",
    border: "#166534",
    card_background: Some("#1C6438"),
};

const MIDNIGHT: Theme = Theme {
    name: "midnight",
    background: "#0F172A",
    gradient: Some("linear-gradient(135deg, #0F172A 0%, #1E293B 100%)"),
    text: "#F8FAFC",
    text_secondary: "#94A3B8",
    accent: "#818CF8",
    accent_hover: "#A5B4FC",
    border: "#1E293B",
    card_background: Some("#1E293B"),
};

const LAVENDER: Theme = Theme {
    name: "lavender",
    background: "#F5F3FF",
    gradient: Some("linear-gradient(135deg, #F5F3FF 0%, #EDE9FE 100%)"),
    text: "#1E1B4B",
    text_secondary: "#6D28D9",
    accent: "#8B5CF6",
    accent_hover: "#7C3AED",
    border: "#DDD6FE",
    card_background: Some("#FFFFFF"),
};

const THEMES: [&Theme; 6] = [&DEFAULT, &OCEAN, &SUNSET, &FOREST, &MIDNIGHT, &LAVENDER];

/// The fixed theme table.
#[derive(Debug, Default)]
pub struct ThemeTable;

impl ThemeTable {
    /// Look up a theme by name with fallback.
    ///
    /// Absent or unknown names return the `default` theme; this never
    /// fails.
    #[must_use]
    pub fn get(&self, name: Option<&str>) -> &'static Theme {
        match name {
            Some(name) => THEMES
                .iter()
                .find(|t| t.name == name)
                .copied()
                .unwrap_or(&DEFAULT),
            None => &DEFAULT,
        }
    }

    /// All theme names, in table order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        THEMES.iter().map(|t| t.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_get_known_themes() {
        let table = ThemeTable;
        for name in ["default", "ocean", "sunset", "forest", "midnight", "lavender"] {
            assert_eq!(table.get(Some(name)).name, name);
        }
    }

    #[test]
    fn test_ocean_background() {
        let table = ThemeTable;
        assert_eq!(table.get(Some("ocean")).background, "#0C4A6E");
    }

    #[test]
    fn test_unknown_falls_back_to_default() {
        let table = ThemeTable;
        assert_eq!(table.get(Some("nonexistent")), table.get(None));
        assert_eq!(table.get(Some("nonexistent")).name, "default");
        assert_eq!(table.get(Some("")).name, "default");
    }

    #[test]
    fn test_background_value_prefers_gradient() {
        let table = ThemeTable;
        let ocean = table.get(Some("ocean"));
        assert!(ocean.background_value().starts_with("linear-gradient"));

        let default = table.get(None);
        assert_eq!(default.background_value(), "#FFFFFF");
    }

    #[test]
    fn test_css_vars_default_omits_optional_entries() {
        let vars = ThemeTable.get(None).css_vars();
        assert_eq!(vars.len(), 6);
        assert!(vars.contains(&("--color-background", "#FFFFFF")));
        assert!(!vars.iter().any(|(k, _)| *k == "--gradient-background"));
        assert!(!vars.iter().any(|(k, _)| *k == "--color-card"));
    }

    #[test]
    fn test_css_vars_ocean_includes_gradient_and_card() {
        let vars = ThemeTable.get(Some("ocean")).css_vars();
        assert!(vars.iter().any(|(k, _)| *k == "--gradient-background"));
        assert!(vars.iter().any(|(k, _)| *k == "--color-card"));
    }

    #[test]
    fn test_names() {
        let names = ThemeTable.names();
        assert_eq!(names.len(), 6);
        assert_eq!(names[0], "default");
    }
}
