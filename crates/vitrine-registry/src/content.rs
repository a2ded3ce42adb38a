//! Per-type content schemas.
//!
//! Each component type has a distinct required content shape. The shapes
//! form a tagged union keyed by the component's type name: the `type`
//! discriminant lives on the page entry, so [`ComponentContent::from_value`]
//! takes the already-resolved [`ComponentKind`] and deserializes the
//! entry's `config.content` into the matching variant.
//!
//! Required fields are plain struct fields; optional decoration is
//! `Option`. Unknown fields are ignored, matching the lenient handling
//! of page documents elsewhere.

use serde::{Deserialize, Serialize};

use crate::kind::ComponentKind;

/// Error produced when `config.content` does not match the shape
/// required by the component's type.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content value is missing or fails to deserialize into the
    /// shape for `kind`.
    #[error("invalid content for {kind}: {message}")]
    Shape {
        /// Component type whose schema was violated.
        kind: ComponentKind,
        /// Underlying deserialization message.
        message: String,
    },
}

/// A call-to-action link (label plus target).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

/// An image reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A navigation link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeaderContent {
    pub logo: String,
    pub links: Vec<NavLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
}

/// Hero requires a title, a subtitle and both call-to-action objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub primary_cta: Cta,
    pub secondary_cta: Cta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServicesContent {
    pub title: String,
    pub services: Vec<ServiceItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdventajeItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdventajesContent {
    pub title: String,
    pub adventajes: Vec<AdventajeItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandsContent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub brands: Vec<BrandItem>,
}

/// A single price expression (amount plus optional billing period).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

/// Pricing requires a title and a list of tiers, each with a price,
/// a feature list and a call to action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub title: String,
    pub price: Price,
    pub features: Vec<String>,
    pub cta: Cta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingContent {
    pub title: String,
    pub tiers: Vec<PricingTier>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    pub logo: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<NavLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqContent {
    pub title: String,
    pub questions: Vec<FaqItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallToActionContent {
    pub title: String,
    pub description: String,
    pub cta: Cta,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestimonialItem {
    pub quote: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Image>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub title: String,
    pub testimonials: Vec<TestimonialItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub stats: Vec<StatItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepsContent {
    pub title: String,
    pub steps: Vec<StepItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamContent {
    pub title: String,
    pub members: Vec<TeamMember>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormContent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FormField>,
    pub submit_label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterContent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub submit_label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentGridContent {
    pub title: String,
    pub items: Vec<GridItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Features2Content {
    pub title: String,
    pub features: Vec<FeatureItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogoCloudContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub logos: Vec<Image>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<serde_yaml::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonContent {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub images: Vec<Image>,
}

/// Typed content for one component entry.
///
/// The variant always corresponds to the entry's resolved
/// [`ComponentKind`]; construction goes through [`Self::from_value`].
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentContent {
    Header(HeaderContent),
    Hero(HeroContent),
    Services(ServicesContent),
    Adventajes(AdventajesContent),
    Brands(BrandsContent),
    Pricing(PricingContent),
    Footer(FooterContent),
    Faq(FaqContent),
    CallToAction(CallToActionContent),
    Testimonials(TestimonialsContent),
    Stats(StatsContent),
    Steps(StepsContent),
    Team(TeamContent),
    ContactForm(ContactFormContent),
    Newsletter(NewsletterContent),
    ContentGrid(ContentGridContent),
    Features2(Features2Content),
    Content(ContentContent),
    LogoCloud(LogoCloudContent),
    Comparison(ComparisonContent),
    Gallery(GalleryContent),
}

impl ComponentContent {
    /// Deserialize a raw content value into the shape required by `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Shape`] when required fields are missing
    /// or have the wrong type for the given kind.
    pub fn from_value(
        kind: ComponentKind,
        value: &serde_yaml::Value,
    ) -> Result<Self, ContentError> {
        fn parse<T: serde::de::DeserializeOwned>(
            kind: ComponentKind,
            value: &serde_yaml::Value,
        ) -> Result<T, ContentError> {
            serde_yaml::from_value(value.clone()).map_err(|e| ContentError::Shape {
                kind,
                message: e.to_string(),
            })
        }

        Ok(match kind {
            ComponentKind::Header => Self::Header(parse(kind, value)?),
            ComponentKind::Hero => Self::Hero(parse(kind, value)?),
            ComponentKind::Services => Self::Services(parse(kind, value)?),
            ComponentKind::Adventajes => Self::Adventajes(parse(kind, value)?),
            ComponentKind::Brands => Self::Brands(parse(kind, value)?),
            ComponentKind::Pricing => Self::Pricing(parse(kind, value)?),
            ComponentKind::Footer => Self::Footer(parse(kind, value)?),
            ComponentKind::Faq => Self::Faq(parse(kind, value)?),
            ComponentKind::CallToAction => Self::CallToAction(parse(kind, value)?),
            ComponentKind::Testimonials => Self::Testimonials(parse(kind, value)?),
            ComponentKind::Stats => Self::Stats(parse(kind, value)?),
            ComponentKind::Steps => Self::Steps(parse(kind, value)?),
            ComponentKind::Team => Self::Team(parse(kind, value)?),
            ComponentKind::ContactForm => Self::ContactForm(parse(kind, value)?),
            ComponentKind::Newsletter => Self::Newsletter(parse(kind, value)?),
            ComponentKind::ContentGrid => Self::ContentGrid(parse(kind, value)?),
            ComponentKind::Features2 => Self::Features2(parse(kind, value)?),
            ComponentKind::Content => Self::Content(parse(kind, value)?),
            ComponentKind::LogoCloud => Self::LogoCloud(parse(kind, value)?),
            ComponentKind::Comparison => Self::Comparison(parse(kind, value)?),
            ComponentKind::Gallery => Self::Gallery(parse(kind, value)?),
        })
    }

    /// The kind this content belongs to.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Header(_) => ComponentKind::Header,
            Self::Hero(_) => ComponentKind::Hero,
            Self::Services(_) => ComponentKind::Services,
            Self::Adventajes(_) => ComponentKind::Adventajes,
            Self::Brands(_) => ComponentKind::Brands,
            Self::Pricing(_) => ComponentKind::Pricing,
            Self::Footer(_) => ComponentKind::Footer,
            Self::Faq(_) => ComponentKind::Faq,
            Self::CallToAction(_) => ComponentKind::CallToAction,
            Self::Testimonials(_) => ComponentKind::Testimonials,
            Self::Stats(_) => ComponentKind::Stats,
            Self::Steps(_) => ComponentKind::Steps,
            Self::Team(_) => ComponentKind::Team,
            Self::ContactForm(_) => ComponentKind::ContactForm,
            Self::Newsletter(_) => ComponentKind::Newsletter,
            Self::ContentGrid(_) => ComponentKind::ContentGrid,
            Self::Features2(_) => ComponentKind::Features2,
            Self::Content(_) => ComponentKind::Content,
            Self::LogoCloud(_) => ComponentKind::LogoCloud,
            Self::Comparison(_) => ComponentKind::Comparison,
            Self::Gallery(_) => ComponentKind::Gallery,
        }
    }
}
