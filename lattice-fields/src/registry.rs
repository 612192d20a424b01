//! Registry mapping field-type names to implementations.

use crate::builtin::{Checkbox, Select, Text, Textarea};
use crate::error::{FieldError, FieldResult};
use crate::fieldtype::FieldType;
use crate::types::{FieldTypeMetadata, HostModule};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Maps type names to [`FieldType`] implementations.
///
/// Host modules resolve a saved field definition's type name through the
/// registry; the type-selection UI lists [`selectable`](Self::selectable)
/// types only.
#[derive(Default)]
pub struct FieldTypeRegistry {
    types: HashMap<String, Arc<dyn FieldType>>,
}

impl FieldTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in type registered.
    pub fn with_builtins() -> FieldResult<Self> {
        let mut registry = Self::new();
        registry.register(Arc::new(Checkbox::new()))?;
        registry.register(Arc::new(Text::new()))?;
        registry.register(Arc::new(Textarea::new()))?;
        registry.register(Arc::new(Select::new()))?;
        Ok(registry)
    }

    /// Registers a field type under its metadata name.
    ///
    /// Rejects descriptors with an empty compatibility set (a configuration
    /// error) and duplicate names.
    pub fn register(&mut self, field_type: Arc<dyn FieldType>) -> FieldResult<()> {
        let meta = field_type.metadata();
        let name = meta.name.clone();

        if meta.compatibility.is_empty() {
            return Err(FieldError::EmptyCompatibility(name));
        }
        if self.types.contains_key(&name) {
            return Err(FieldError::AlreadyRegistered(name));
        }

        debug!(field_type = %name, enabled = meta.enabled, "field type registered");
        self.types.insert(name, field_type);
        Ok(())
    }

    /// Looks a type up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn FieldType>> {
        self.types.get(name).cloned()
    }

    /// Like [`get`](Self::get) but with a typed error for callers that need
    /// the type to exist.
    pub fn require(&self, name: &str) -> FieldResult<Arc<dyn FieldType>> {
        self.get(name)
            .ok_or_else(|| FieldError::UnknownType(name.to_string()))
    }

    /// Descriptors of enabled types compatible with the given host module,
    /// sorted by name: the contents of a type-selection UI.
    #[must_use]
    pub fn selectable(&self, host: HostModule) -> Vec<&FieldTypeMetadata> {
        let mut metas: Vec<&FieldTypeMetadata> = self
            .types
            .values()
            .map(|t| t.metadata())
            .filter(|m| m.enabled && m.supports(host))
            .collect();
        metas.sort_by(|a, b| a.name.cmp(&b.name));
        metas
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
