//! Component registry and content schemas for Vitrine.
//!
//! This crate provides:
//! - [`ComponentKind`]: the closed set of component type names
//! - [`ComponentRegistry`]: the dispatch table from type name to
//!   registered component, fixed at construction
//! - [`ComponentContent`]: the per-type content shapes as a tagged union
//!
//! The registry is built once at startup via
//! [`ComponentRegistry::builtin`] and passed explicitly to consumers;
//! it is never mutated afterwards and is safe for concurrent reads.
//!
//! # Quick Start
//!
//! ```
//! use vitrine_registry::ComponentRegistry;
//!
//! let registry = ComponentRegistry::builtin();
//!
//! assert!(registry.is_valid_type("Hero"));
//! assert!(!registry.is_valid_type("Testimonialz"));
//!
//! let hero = registry.resolve("Hero").unwrap();
//! assert_eq!(hero.name(), "Hero");
//! ```

pub(crate) mod content;
mod kind;
mod registry;

pub use content::{ComponentContent, ContentError};
pub use kind::ComponentKind;
pub use registry::{ComponentRegistry, RegisteredComponent, RegistryError};
