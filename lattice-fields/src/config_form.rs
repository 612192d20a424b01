//! Meta-form builder for configuring a field type's own settings.

use crate::error::FieldResult;
use crate::fieldtype::FieldType;
use crate::instance::FieldInstance;
use crate::registry::FieldTypeRegistry;
use std::sync::Arc;

/// Builds the small admin form a field type uses to configure itself.
///
/// The contract is used reflexively here: a checkbox's settings are a select
/// (default state), a textarea (help text) and another checkbox (required).
/// Each use creates a fresh builder, so no state leaks between
/// configuration requests.
#[derive(Default)]
pub struct FieldConfigForm {
    fields: Vec<(Arc<dyn FieldType>, FieldInstance)>,
}

impl FieldConfigForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an unbound instance of the named type and returns it for
    /// fluent configuration.
    pub fn add_field(
        &mut self,
        registry: &FieldTypeRegistry,
        type_name: &str,
    ) -> FieldResult<&mut FieldInstance> {
        let field_type = registry.require(type_name)?;
        self.fields.push((field_type, FieldInstance::default()));
        let (_, instance) = self.fields.last_mut().expect("field was just pushed");
        Ok(instance)
    }

    /// Renders every field's admin markup in insertion order. No submission
    /// is in flight when a configuration form renders, so instances bind
    /// their defaults.
    pub fn output_admin(&mut self) -> String {
        self.fields
            .iter_mut()
            .map(|(field_type, instance)| field_type.render_admin(instance, None))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of fields added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
