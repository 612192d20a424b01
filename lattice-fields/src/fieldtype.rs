//! The polymorphic field-type contract.

use crate::attributes::AttributeSet;
use crate::error::FieldResult;
use crate::instance::FieldInstance;
use crate::registry::FieldTypeRegistry;
use crate::types::{FieldDefinition, FieldTypeMetadata, ValidationRule};
use lattice_types::Submission;

/// Contract every concrete field type implements.
///
/// Splitting [`render_shared`](FieldType::render_shared) from the two
/// context-specific entry points lets every type share attribute assembly
/// while admin and frontend apply different surrounding markup and different
/// value-binding timing: admin binds eagerly from the default, frontend
/// prefers the submitted value over the default.
pub trait FieldType: Send + Sync {
    /// Descriptor consulted by the registry and type-selection UI.
    fn metadata(&self) -> &FieldTypeMetadata;

    /// Computes the attribute set shared by admin and frontend rendering
    /// (type, name, value, classes, checked/selected state). Never binds.
    fn render_shared(&self, instance: &FieldInstance) -> AttributeSet;

    /// Full admin-editing markup (label + input + help block) wrapped in a
    /// list item. Binds the default first when no submission is in flight
    /// and the instance has no bound value.
    fn render_admin(
        &self,
        instance: &mut FieldInstance,
        submission: Option<&Submission>,
    ) -> String;

    /// Public input markup only. Binds an unbound instance from the truthy
    /// submitted value, falling back to the default.
    fn render_frontend(
        &self,
        instance: &mut FieldInstance,
        submission: Option<&Submission>,
    ) -> String;

    /// Rule identifiers the host form's rule engine should apply, in order.
    fn validation_rules(&self, instance: &FieldInstance) -> Vec<ValidationRule> {
        if instance.required {
            vec![ValidationRule::Required]
        } else {
            Vec::new()
        }
    }

    /// Type-specific validation beyond the declared rule list. The generic
    /// rule engine already covers `Required`; most types have nothing extra.
    fn validate_post(&self, instance: &FieldInstance, submission: &Submission) -> FieldResult<()> {
        let _ = (instance, submission);
        Ok(())
    }

    /// Converts the raw submission into the canonical persisted value.
    /// Total for every built-in type: absent input maps to the type's empty
    /// representation rather than failing.
    fn post_to_storage(&self, instance: &FieldInstance, submission: &Submission) -> String;

    /// Renders the meta-form used to configure an instance of this type.
    /// `existing` prefills the form when editing a saved definition; the
    /// host resolves the definition id before calling in.
    fn configuration_form(
        &self,
        registry: &FieldTypeRegistry,
        existing: Option<&FieldDefinition>,
    ) -> FieldResult<String>;

    /// Maps a raw configuration-form submission into the record to persist.
    /// Normalizes `default` to `"checked"`/`""` where applicable and
    /// `required` to a boolean.
    fn process_configuration_submission(&self, submission: &Submission) -> FieldDefinition;
}
