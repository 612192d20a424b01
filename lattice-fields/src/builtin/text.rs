//! Single-line text input.

use crate::attributes::{AttributeSet, compile_attributes};
use crate::config_form::FieldConfigForm;
use crate::error::FieldResult;
use crate::fieldtype::FieldType;
use crate::instance::{FieldInstance, bind_admin, bind_frontend};
use crate::registry::FieldTypeRegistry;
use crate::types::{FieldDefinition, FieldTypeMetadata, HostModule, StorageColumn};
use lattice_types::Submission;

pub struct Text {
    metadata: FieldTypeMetadata,
}

impl Text {
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: FieldTypeMetadata {
                name: "text".to_string(),
                description: "A single-line text input.".to_string(),
                compatibility: HostModule::ALL.to_vec(),
                enabled: true,
                storage_column: StorageColumn::VarChar(255),
            },
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for Text {
    fn metadata(&self) -> &FieldTypeMetadata {
        &self.metadata
    }

    fn render_shared(&self, instance: &FieldInstance) -> AttributeSet {
        let mut attributes = AttributeSet::new();
        attributes.insert("type".into(), "text".into());
        attributes.insert("name".into(), instance.name.clone());
        attributes.insert(
            "value".into(),
            instance.value.clone().unwrap_or_default(),
        );
        attributes.insert("class".into(), instance.class_attribute("text"));
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

    fn post_to_storage(&self, instance: &FieldInstance, submission: &Submission) -> String {
        submission.get(&instance.name).unwrap_or_default().to_string()
    }

    fn configuration_form(
        &self,
        registry: &FieldTypeRegistry,
        existing: Option<&FieldDefinition>,
    ) -> FieldResult<String> {
        let mut form = FieldConfigForm::new();

        let default = form.add_field(registry, "text")?;
        default.label("Default Value").name("default");
        if let Some(definition) = existing {
            default.value(definition.default.clone());
        }

        let help = form.add_field(registry, "textarea")?;
        help.label("Help Text")
            .name("help")
            .width("500px")
            .height("80px")
            .help("This help text will be displayed beneath the field.");
        if let Some(definition) = existing {
            help.value(definition.help.clone());
        }

        let required = form.add_field(registry, "checkbox")?;
        required
            .label("Required Field")
            .name("required")
            .help("If checked, this field must be filled for the form to be processed.");
        if let Some(definition) = existing {
            required.value(if definition.required { "1" } else { "0" });
        }

        Ok(form.output_admin())
    }

    fn process_configuration_submission(&self, submission: &Submission) -> FieldDefinition {
        let mut definition = super::base_definition(submission);
        definition.default = submission.get("default").unwrap_or_default().to_string();
        definition
    }
}
