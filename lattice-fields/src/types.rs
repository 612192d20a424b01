//! Descriptor and record types for the field framework.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-module contexts a field type may attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostModule {
    /// Content publishing (articles, pages).
    Publish,
    /// User profiles.
    Users,
    /// Product catalogs.
    Products,
    /// Content collections.
    Collections,
    /// Generic standalone forms.
    Forms,
}

impl HostModule {
    /// Every host module, for "compatible everywhere" declarations.
    pub const ALL: [HostModule; 5] = [
        HostModule::Publish,
        HostModule::Users,
        HostModule::Products,
        HostModule::Collections,
        HostModule::Forms,
    ];
}

impl fmt::Display for HostModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            HostModule::Publish => "publish",
            HostModule::Users => "users",
            HostModule::Products => "products",
            HostModule::Collections => "collections",
            HostModule::Forms => "forms",
        };
        write!(f, "{tag}")
    }
}

/// Semantic column type the host persistence layer should use for values of
/// a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageColumn {
    /// Boolean stored as a tiny integer.
    TinyInt,
    /// Bounded string column.
    VarChar(u16),
    /// Unbounded text column.
    Text,
}

impl fmt::Display for StorageColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageColumn::TinyInt => write!(f, "TINYINT(1)"),
            StorageColumn::VarChar(len) => write!(f, "VARCHAR({len})"),
            StorageColumn::Text => write!(f, "TEXT"),
        }
    }
}

/// Descriptor for one field type: what the registry and type-selection UI
/// know about it without instantiating anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldTypeMetadata {
    /// Unique type name, e.g. "checkbox".
    pub name: String,
    /// Human-readable summary shown in the type-selection UI.
    pub description: String,
    /// Host modules this type may attach to. Must be non-empty; the registry
    /// rejects a descriptor with no compatibility.
    pub compatibility: Vec<HostModule>,
    /// Disabled types stay registered but never appear in selection UIs.
    pub enabled: bool,
    /// Column type the host persistence layer should use for values.
    pub storage_column: StorageColumn,
}

impl FieldTypeMetadata {
    /// True when this type may attach to the given host module.
    #[must_use]
    pub fn supports(&self, host: HostModule) -> bool {
        self.compatibility.contains(&host)
    }
}

/// One option in a select field: the submitted value and its visible name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub name: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }
}

/// Identifier of a validation rule the host form's rule engine understands.
///
/// The generic engine owns rule evaluation; field types only declare which
/// rules apply. Richer types append their own variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// The field must carry a truthy submitted value.
    Required,
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationRule::Required => write!(f, "required"),
        }
    }
}

/// The record a configuration-form submission maps to, persisted by the
/// host as a saved field definition.
///
/// Option lists and other per-type extras are serialized by the persistence
/// layer; they are opaque to this subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    /// Registered type name, e.g. "checkbox".
    pub field_type: String,
    /// Normalized default: `"checked"` or `""` for checkbox-shaped types,
    /// the literal default text otherwise.
    pub default: String,
    pub help: String,
    pub required: bool,
}
