//! Multi-line text area.

use crate::attributes::{AttributeSet, compile_attributes};
use crate::config_form::FieldConfigForm;
use crate::error::FieldResult;
use crate::fieldtype::FieldType;
use crate::instance::{FieldInstance, bind_admin, bind_frontend};
use crate::registry::FieldTypeRegistry;
use crate::types::{FieldDefinition, FieldTypeMetadata, HostModule, StorageColumn};
use lattice_types::Submission;

pub struct Textarea {
    metadata: FieldTypeMetadata,
}

impl Textarea {
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: FieldTypeMetadata {
                name: "textarea".to_string(),
                description: "A multi-line text area.".to_string(),
                compatibility: HostModule::ALL.to_vec(),
                enabled: true,
                storage_column: StorageColumn::Text,
            },
        }
    }

    /// The value never renders as an attribute; it is the element content.
    fn widget(&self, instance: &FieldInstance) -> String {
        let attributes = compile_attributes(&self.render_shared(instance));
        let content = instance.value.as_deref().unwrap_or_default();
        format!("<textarea {attributes}>{content}</textarea>")
    }
}

impl Default for Textarea {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for Textarea {
    fn metadata(&self) -> &FieldTypeMetadata {
        &self.metadata
    }

    fn render_shared(&self, instance: &FieldInstance) -> AttributeSet {
        let mut attributes = AttributeSet::new();
        attributes.insert("name".into(), instance.name.clone());
        attributes.insert("class".into(), instance.class_attribute("textarea"));

        let mut style = Vec::new();
        if let Some(width) = &instance.width {
            style.push(format!("width: {width}"));
        }
        if let Some(height) = &instance.height {
            style.push(format!("height: {height}"));
        }
        if !style.is_empty() {
            attributes.insert("style".into(), style.join("; "));
        }

        attributes
    }

    fn render_admin(
        &self,
        instance: &mut FieldInstance,
        submission: Option<&Submission>,
    ) -> String {
        bind_admin(instance, submission);
        let widget = self.widget(instance);
        super::wrap_admin(instance, &widget)
    }

    fn render_frontend(
        &self,
        instance: &mut FieldInstance,
        submission: Option<&Submission>,
    ) -> String {
        bind_frontend(instance, submission);
        self.widget(instance)
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

        let default = form.add_field(registry, "textarea")?;
        default
            .label("Default Value")
            .name("default")
            .width("500px")
            .height("80px");
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
