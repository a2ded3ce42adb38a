//! The closed set of component type names.

use serde::{Deserialize, Serialize};

/// A registered component type.
///
/// The set is closed and known at build time; pages reference these by
/// the exact string form returned from [`ComponentKind::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Header,
    Hero,
    Services,
    Adventajes,
    Brands,
    Pricing,
    Footer,
    #[serde(rename = "FAQ")]
    Faq,
    CallToAction,
    Testimonials,
    Stats,
    Steps,
    Team,
    ContactForm,
    Newsletter,
    ContentGrid,
    Features2,
    Content,
    LogoCloud,
    Comparison,
    Gallery,
}

impl ComponentKind {
    /// All component kinds, in registration order.
    pub const ALL: [Self; 21] = [
        Self::Header,
        Self::Hero,
        Self::Services,
        Self::Adventajes,
        Self::Brands,
        Self::Pricing,
        Self::Footer,
        Self::Faq,
        Self::CallToAction,
        Self::Testimonials,
        Self::Stats,
        Self::Steps,
        Self::Team,
        Self::ContactForm,
        Self::Newsletter,
        Self::ContentGrid,
        Self::Features2,
        Self::Content,
        Self::LogoCloud,
        Self::Comparison,
        Self::Gallery,
    ];

    /// The canonical string form used in page documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::Hero => "Hero",
            Self::Services => "Services",
            Self::Adventajes => "Adventajes",
            Self::Brands => "Brands",
            Self::Pricing => "Pricing",
            Self::Footer => "Footer",
            Self::Faq => "FAQ",
            Self::CallToAction => "CallToAction",
            Self::Testimonials => "Testimonials",
            Self::Stats => "Stats",
            Self::Steps => "Steps",
            Self::Team => "Team",
            Self::ContactForm => "ContactForm",
            Self::Newsletter => "Newsletter",
            Self::ContentGrid => "ContentGrid",
            Self::Features2 => "Features2",
            Self::Content => "Content",
            Self::LogoCloud => "LogoCloud",
            Self::Comparison => "Comparison",
            Self::Gallery => "Gallery",
        }
    }

    /// Look up a kind by its canonical name.
    ///
    /// Matching is exact (case-sensitive); unknown names return `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == name)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_all_contains_every_kind_once() {
        for kind in ComponentKind::ALL {
            let count = ComponentKind::ALL.iter().filter(|k| **k == kind).count();
            assert_eq!(count, 1, "{kind} appears more than once in ALL");
        }
    }

    #[test]
    fn test_from_name_roundtrip() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(ComponentKind::from_name("Testimonialz"), None);
        assert_eq!(ComponentKind::from_name("hero"), None);
        assert_eq!(ComponentKind::from_name(""), None);
    }

    #[test]
    fn test_faq_serialized_form() {
        assert_eq!(ComponentKind::Faq.as_str(), "FAQ");
        assert_eq!(ComponentKind::from_name("FAQ"), Some(ComponentKind::Faq));
        assert_eq!(ComponentKind::from_name("Faq"), None);
    }

    #[test]
    fn test_serde_matches_as_str() {
        for kind in ComponentKind::ALL {
            let yaml = serde_yaml::to_string(&kind).unwrap();
            assert_eq!(yaml.trim(), kind.as_str());
            let parsed: ComponentKind = serde_yaml::from_str(kind.as_str()).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ComponentKind::CallToAction.to_string(), "CallToAction");
    }
}
