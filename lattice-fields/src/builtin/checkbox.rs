//! Single on/off checkbox, the reference field type.

use crate::attributes::{AttributeSet, compile_attributes};
use crate::config_form::FieldConfigForm;
use crate::error::FieldResult;
use crate::fieldtype::FieldType;
use crate::instance::{FieldInstance, bind_admin, bind_frontend};
use crate::registry::FieldTypeRegistry;
use crate::types::{FieldDefinition, FieldTypeMetadata, HostModule, SelectOption, StorageColumn};
use lattice_types::Submission;

pub struct Checkbox {
    metadata: FieldTypeMetadata,
}

impl Checkbox {
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: FieldTypeMetadata {
                name: "checkbox".to_string(),
                description: "A single on/off checkbox.".to_string(),
                compatibility: HostModule::ALL.to_vec(),
                enabled: true,
                storage_column: StorageColumn::TinyInt,
            },
        }
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for Checkbox {
    fn metadata(&self) -> &FieldTypeMetadata {
        &self.metadata
    }

    fn render_shared(&self, instance: &FieldInstance) -> AttributeSet {
        let mut attributes = AttributeSet::new();
        attributes.insert("type".into(), "checkbox".into());
        attributes.insert("name".into(), instance.name.clone());
        attributes.insert("value".into(), "1".into());
        attributes.insert("class".into(), instance.class_attribute("checkbox"));

        if instance.is_truthy() {
            attributes.insert("checked".into(), "checked".into());
        }

        attributes
    }

    fn render_admin(
        &self,
        instance: &mut FieldInstance,
        submission: Option<&Submission>,
    ) -> String {
        bind_admin(instance, submission);
        let attributes = compile_attributes(&self.render_shared(instance));
        super::wrap_admin(instance, &format!("<input {attributes} />"))
    }

    fn render_frontend(
        &self,
        instance: &mut FieldInstance,
        submission: Option<&Submission>,
    ) -> String {
        bind_frontend(instance, submission);
        let attributes = compile_attributes(&self.render_shared(instance));
        format!("<input {attributes} />")
    }

    // validation_rules: the default required-only set.
    // validate_post: nothing beyond the generic rule engine.

    fn post_to_storage(&self, instance: &FieldInstance, submission: &Submission) -> String {
        if submission.truthy(&instance.name).is_some() {
            "1".to_string()
        } else {
            "0".to_string()
        }
    }

    fn configuration_form(
        &self,
        registry: &FieldTypeRegistry,
        existing: Option<&FieldDefinition>,
    ) -> FieldResult<String> {
        let mut form = FieldConfigForm::new();

        let default = form.add_field(registry, "select")?;
        default.label("Default State").name("default").options(vec![
            SelectOption::new("checked", "Checked"),
            SelectOption::new("unchecked", "Unchecked"),
        ]);
        if let Some(definition) = existing {
            default.value(if definition.default.is_empty() {
                "unchecked"
            } else {
                "checked"
            });
        }

        let help = form.add_field(registry, "textarea")?;
        help.label("Help Text")
            .name("help")
            .width("500px")
            .height("80px")
            .help(
                "This help text will be displayed beneath the field. Use it to guide the user \
                 in responding correctly.",
            );
        if let Some(definition) = existing {
            help.value(definition.help.clone());
        }

        let required = form.add_field(registry, "checkbox")?;
        required
            .label("Required Field")
            .name("required")
            .help("If checked, this box must be checked for the form to be processed.");
        if let Some(definition) = existing {
            required.value(if definition.required { "1" } else { "0" });
        }

        Ok(form.output_admin())
    }

    fn process_configuration_submission(&self, submission: &Submission) -> FieldDefinition {
        let mut definition = super::base_definition(submission);
        definition.default = if submission.get("default") == Some("checked") {
            "checked".to_string()
        } else {
            String::new()
        };
        definition
    }
}
