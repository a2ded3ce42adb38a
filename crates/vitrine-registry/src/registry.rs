//! The component dispatch table.

use std::collections::HashMap;

use crate::content::{ComponentContent, ContentError};
use crate::kind::ComponentKind;

/// Error type for registry lookups.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The requested type is not registered.
    ///
    /// Unreachable for documents that passed structural validation, but
    /// the registry guards against it anyway.
    #[error("Unknown component type '{requested}'. Valid types: {}", valid.join(", "))]
    UnknownType {
        /// The type string that was asked for.
        requested: String,
        /// Every registered type name, sorted.
        valid: Vec<String>,
    },
}

/// One renderable unit bound to a type name.
///
/// Binds the component kind to its content schema: parsing an entry's
/// `config.content` through [`RegisteredComponent::parse_content`] is
/// the per-type shape check.
#[derive(Debug)]
pub struct RegisteredComponent {
    kind: ComponentKind,
}

impl RegisteredComponent {
    /// The component kind.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// The canonical type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Deserialize a raw content value against this component's schema.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] when the value does not match the shape
    /// required by this component's kind.
    pub fn parse_content(&self, value: &serde_yaml::Value) -> Result<ComponentContent, ContentError> {
        ComponentContent::from_value(self.kind, value)
    }
}

/// The closed mapping from type name to renderable unit.
///
/// Built once via [`ComponentRegistry::builtin`] and never mutated;
/// safe for concurrent reads across parallel page loads.
#[derive(Debug)]
pub struct ComponentRegistry {
    entries: HashMap<&'static str, RegisteredComponent>,
}

impl ComponentRegistry {
    /// Build the registry with every built-in component type.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = ComponentKind::ALL
            .into_iter()
            .map(|kind| (kind.as_str(), RegisteredComponent { kind }))
            .collect();
        Self { entries }
    }

    /// Resolve a type name to its registered component.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] listing all valid type
    /// names when `name` is not registered. This is fatal for the page
    /// being processed.
    pub fn resolve(&self, name: &str) -> Result<&RegisteredComponent, RegistryError> {
        self.entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownType {
                requested: name.to_owned(),
                valid: self.list_types().iter().map(|s| (*s).to_owned()).collect(),
            })
    }

    /// Membership test against the registered type set.
    #[must_use]
    pub fn is_valid_type(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered type names, sorted.
    #[must_use]
    pub fn list_types(&self) -> Vec<&'static str> {
        let mut types: Vec<&'static str> = self.entries.keys().copied().collect();
        types.sort_unstable();
        types
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
