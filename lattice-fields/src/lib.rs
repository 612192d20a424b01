//! Pluggable field-type framework for the Lattice content-modeling core.
//!
//! A *field type* describes one kind of input widget (checkbox, text,
//! select, …) and how it renders, validates and persists. Host modules
//! (publishing, users, products, collections, generic forms) treat all
//! types uniformly through the [`FieldType`] trait:
//!
//! - a [`FieldTypeRegistry`] maps type names to implementations and gates
//!   what appears in type-selection UIs
//! - a [`FieldInstance`] is one configured, bound occurrence of a type
//!   within a host form
//! - a [`FieldConfigForm`] is the meta-form an administrator uses to
//!   configure a field type's own settings, itself built from field
//!   instances of other types
//!
//! Rendering splits into a shared attribute-assembly step
//! ([`FieldType::render_shared`]) and two context-specific entry points
//! (admin editing UI vs public-facing form) that differ in surrounding
//! markup and in when the instance binds its value.

mod attributes;
mod config_form;
mod error;
mod fieldtype;
mod instance;
mod registry;
mod types;

pub mod builtin;

pub use attributes::{AttributeSet, compile_attributes};
pub use config_form::FieldConfigForm;
pub use error::{FieldError, FieldResult};
pub use fieldtype::FieldType;
pub use instance::{FieldInstance, bind_admin, bind_frontend};
pub use registry::FieldTypeRegistry;
pub use types::{
    FieldDefinition, FieldTypeMetadata, HostModule, SelectOption, StorageColumn, ValidationRule,
};
