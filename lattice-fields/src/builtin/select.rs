//! Dropdown list of fixed options.

use crate::attributes::{AttributeSet, compile_attributes};
use crate::config_form::FieldConfigForm;
use crate::error::{FieldError, FieldResult};
use crate::fieldtype::FieldType;
use crate::instance::{FieldInstance, bind_admin, bind_frontend};
use crate::registry::FieldTypeRegistry;
use crate::types::{FieldDefinition, FieldTypeMetadata, HostModule, StorageColumn};
use lattice_types::Submission;

pub struct Select {
    metadata: FieldTypeMetadata,
}

impl Select {
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: FieldTypeMetadata {
                name: "select".to_string(),
                description: "A dropdown list of options.".to_string(),
                compatibility: HostModule::ALL.to_vec(),
                enabled: true,
                storage_column: StorageColumn::VarChar(255),
            },
        }
    }

    fn widget(&self, instance: &FieldInstance) -> String {
        let attributes = compile_attributes(&self.render_shared(instance));
        let options = instance
            .options
            .iter()
            .map(|option| {
                let selected = if instance.value.as_deref() == Some(option.value.as_str()) {
                    " selected=\"selected\""
                } else {
                    ""
                };
                format!(
                    "<option value=\"{}\"{}>{}</option>",
                    option.value, selected, option.name
                )
            })
            .collect::<Vec<_>>()
            .join("\n        ");
        format!("<select {attributes}>\n        {options}\n    </select>")
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldType for Select {
    fn metadata(&self) -> &FieldTypeMetadata {
        &self.metadata
    }

    fn render_shared(&self, instance: &FieldInstance) -> AttributeSet {
        let mut attributes = AttributeSet::new();
        attributes.insert("name".into(), instance.name.clone());
        attributes.insert("class".into(), instance.class_attribute("select"));
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

    /// A submitted value must be one of the configured options; absence is
    /// the rule engine's concern, not ours.
    fn validate_post(&self, instance: &FieldInstance, submission: &Submission) -> FieldResult<()> {
        match submission.truthy(&instance.name) {
            None => Ok(()),
            Some(value) if instance.options.iter().any(|o| o.value == value) => Ok(()),
            Some(value) => Err(FieldError::Validation {
                field: instance.name.clone(),
                message: format!("'{value}' is not one of the available options"),
            }),
        }
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
        default
            .label("Default Value")
            .name("default")
            .help("Value of the option selected by default.");
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
            .help("If checked, an option must be selected for the form to be processed.");
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
