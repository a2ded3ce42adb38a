//! Named visual-style descriptors.
//!
//! Five fixed variants plus the implicit `default`. Each variant carries
//! class strings for the container/text/heading/button/card/border roles;
//! callers can append their own overrides, which are not validated.

use serde::Serialize;

/// A role a style string applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleRole {
    Container,
    Text,
    Heading,
    Button,
    Card,
    Border,
}

/// A named visual-style descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Canonical variant name.
    pub name: &'static str,
    pub container: &'static str,
    pub text: &'static str,
    pub heading: &'static str,
    pub button: &'static str,
    pub card: &'static str,
    pub border: &'static str,
}

impl Variant {
    /// The base class string for a role.
    #[must_use]
    pub const fn classes(&self, role: StyleRole) -> &'static str {
        match role {
            StyleRole::Container => self.container,
            StyleRole::Text => self.text,
            StyleRole::Heading => self.heading,
            StyleRole::Button => self.button,
            StyleRole::Card => self.card,
            StyleRole::Border => self.border,
        }
    }

    /// Role-scoped class string with an optional caller-supplied
    /// override appended.
    ///
    /// Custom values are appended verbatim; they are not validated.
    #[must_use]
    pub fn class_for(&self, role: StyleRole, custom: Option<&str>) -> String {
        let base = self.classes(role);
        match custom {
            Some(custom) if !custom.is_empty() => format!("{base} {custom}"),
            _ => base.to_owned(),
        }
    }
}

const DEFAULT: Variant = Variant {
    name: "default",
    container: "bg-transparent",
    text: "text-gray-700",
    heading: "text-gray-900",
    button: "bg-blue-600 text-white hover:bg-blue-700",
    card: "bg-white shadow-sm",
    border: "border-gray-200",
};

const DARK: Variant = Variant {
    name: "dark",
    container: "bg-gray-900",
    text: "text-gray-300",
    heading: "text-white",
    button: "bg-white text-gray-900 hover:bg-gray-100",
    card: "bg-gray-800",
    border: "border-gray-700",
};

const LIGHT: Variant = Variant {
    name: "light",
    container: "bg-gray-50",
    text: "text-gray-600",
    heading: "text-gray-900",
    button: "bg-gray-900 text-white hover:bg-gray-800",
    card: "bg-white",
    border: "border-gray-100",
};

const GRADIENT: Variant = Variant {
    name: "gradient",
    container: "bg-gradient-to-br from-indigo-600 to-purple-600",
    text: "text-indigo-100",
    heading: "text-white",
    button: "bg-white text-indigo-700 hover:bg-indigo-50",
    card: "bg-white/10 backdrop-blur",
    border: "border-white/20",
};

const OUTLINE: Variant = Variant {
    name: "outline",
    container: "bg-transparent",
    text: "text-gray-700",
    heading: "text-gray-900",
    button: "border border-gray-900 text-gray-900 hover:bg-gray-900 hover:text-white",
    card: "bg-transparent border border-gray-300",
    border: "border-gray-300",
};

const VARIANTS: [&Variant; 5] = [&DEFAULT, &DARK, &LIGHT, &GRADIENT, &OUTLINE];

/// The fixed variant table.
#[derive(Debug, Default)]
pub struct VariantTable;

impl VariantTable {
    /// Look up a variant by name with fallback.
    ///
    /// Absent or unknown names return the `default` variant; this never
    /// fails.
    #[must_use]
    pub fn get(&self, name: Option<&str>) -> &'static Variant {
        match name {
            Some(name) => VARIANTS
                .iter()
                .find(|v| v.name == name)
                .copied()
                .unwrap_or(&DEFAULT),
            None => &DEFAULT,
        }
    }

    /// All variant names, in table order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        VARIANTS.iter().map(|v| v.name).collect()
    }
}
