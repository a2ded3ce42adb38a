//! Structural validation of merged page documents.
//!
//! Fail-fast: rules are checked in a fixed order and the first violation
//! halts validation. Every error names the page, the field, and (for
//! component violations) the index and observed type string. Disabled
//! entries are validated like any other; soft-disable is a render-time
//! concern.

use vitrine_registry::{ComponentRegistry, RegistryError};

use crate::model::{ComponentEntry, PageDocument};

/// A structural validation failure. Fatal for the page being processed.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("page '{page}': missing 'meta' section")]
    MissingMeta { page: String },

    #[error("page '{page}': 'meta.{field}' must be present and non-empty")]
    EmptyMetaField { page: String, field: &'static str },

    #[error("page '{page}': missing 'components' list")]
    MissingComponents { page: String },

    #[error("page '{page}': 'components' must be a sequence")]
    ComponentsNotASequence { page: String },

    #[error("page '{page}': component[{index}] is missing 'type'")]
    MissingComponentType { page: String, index: usize },

    #[error(
        "page '{page}': component[{index}] has unknown type '{type_name}'. Valid types: {}",
        valid.join(", ")
    )]
    UnknownComponentType {
        page: String,
        index: usize,
        type_name: String,
        valid: Vec<String>,
    },

    #[error("page '{page}': component[{index}] ({type_name}) is missing 'config'")]
    MissingComponentConfig {
        page: String,
        index: usize,
        type_name: String,
    },

    #[error("page '{page}': component[{index}] ({type_name}) is missing 'config.content'")]
    MissingComponentContent {
        page: String,
        index: usize,
        type_name: String,
    },

    #[error("page '{page}': component[{index}] ({type_name}): {message}")]
    InvalidContent {
        page: String,
        index: usize,
        type_name: String,
        message: String,
    },

    #[error("page '{page}': {slot} is missing 'type'")]
    MissingSlotType { page: String, slot: &'static str },

    #[error(
        "page '{page}': {slot} has unknown type '{type_name}'. Valid types: {}",
        valid.join(", ")
    )]
    UnknownSlotType {
        page: String,
        slot: &'static str,
        type_name: String,
        valid: Vec<String>,
    },
}

/// Validate a merged page document against the structural rules.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, in rule order:
/// meta presence and non-empty title/description, components presence,
/// per-entry type/config/content checks in index order, then header and
/// footer slots.
pub(crate) fn validate(
    page: &str,
    doc: &PageDocument,
    registry: &ComponentRegistry,
) -> Result<(), ValidationError> {
    let meta = doc.meta.as_ref().ok_or_else(|| ValidationError::MissingMeta {
        page: page.to_owned(),
    })?;
    require_meta_field(page, "title", meta.title.as_deref())?;
    require_meta_field(page, "description", meta.description.as_deref())?;

    let components = doc
        .components
        .as_ref()
        .ok_or_else(|| ValidationError::MissingComponents {
            page: page.to_owned(),
        })?;

    for (index, entry) in components.iter().enumerate() {
        validate_entry(page, index, entry, registry)?;
    }

    if let Some(header) = &doc.header {
        validate_slot(page, "header", header, registry)?;
    }
    if let Some(footer) = &doc.footer {
        validate_slot(page, "footer", footer, registry)?;
    }

    Ok(())
}

fn require_meta_field(
    page: &str,
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::EmptyMetaField {
            page: page.to_owned(),
            field,
        }),
    }
}

fn validate_entry(
    page: &str,
    index: usize,
    entry: &ComponentEntry,
    registry: &ComponentRegistry,
) -> Result<(), ValidationError> {
    let type_name = entry.component_type.as_deref().ok_or_else(|| {
        ValidationError::MissingComponentType {
            page: page.to_owned(),
            index,
        }
    })?;

    let component = registry.resolve(type_name).map_err(|e| {
        let RegistryError::UnknownType { requested, valid } = e;
        ValidationError::UnknownComponentType {
            page: page.to_owned(),
            index,
            type_name: requested,
            valid,
        }
    })?;

    let config = entry
        .config
        .as_ref()
        .ok_or_else(|| ValidationError::MissingComponentConfig {
            page: page.to_owned(),
            index,
            type_name: type_name.to_owned(),
        })?;

    let content =
        config
            .content
            .as_ref()
            .ok_or_else(|| ValidationError::MissingComponentContent {
                page: page.to_owned(),
                index,
                type_name: type_name.to_owned(),
            })?;

    component
        .parse_content(content)
        .map_err(|e| ValidationError::InvalidContent {
            page: page.to_owned(),
            index,
            type_name: type_name.to_owned(),
            message: e.to_string(),
        })?;

    Ok(())
}

fn validate_slot(
    page: &str,
    slot: &'static str,
    entry: &ComponentEntry,
    registry: &ComponentRegistry,
) -> Result<(), ValidationError> {
    let type_name =
        entry
            .component_type
            .as_deref()
            .ok_or_else(|| ValidationError::MissingSlotType {
                page: page.to_owned(),
                slot,
            })?;

    if !registry.is_valid_type(type_name) {
        return Err(ValidationError::UnknownSlotType {
            page: page.to_owned(),
            slot,
            type_name: type_name.to_owned(),
            valid: registry.list_types().iter().map(|s| (*s).to_owned()).collect(),
        });
    }

    Ok(())
}
