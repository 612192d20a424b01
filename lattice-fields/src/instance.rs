//! Configured occurrences of a field type within one host form.

use crate::types::SelectOption;
use lattice_types::Submission;
use serde::{Deserialize, Serialize};

/// One configured, bindable occurrence of a field type.
///
/// Identity (`name`, `label`) and configuration (`default`, `required`,
/// `help`) come from the saved field definition or from the fluent setters;
/// `value` stays unset until a render entry point or the host binds it.
/// An unbound instance must never render as checked or otherwise truthy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldInstance {
    pub name: String,
    pub label: String,
    pub help: Option<String>,
    pub default: Option<String>,
    pub required: bool,
    /// Currently bound value; `None` until first bind.
    pub value: Option<String>,
    /// Extra CSS classes beyond the type's own.
    pub classes: Vec<String>,
    /// Options for select-shaped types.
    pub options: Vec<SelectOption>,
    /// CSS width for sized widgets (textarea).
    pub width: Option<String>,
    /// CSS height for sized widgets (textarea).
    pub height: Option<String>,
}

impl FieldInstance {
    /// Creates an unbound instance with the given field name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // Fluent setters return `&mut Self` so the config-form builder can hand
    // out a mutable reference and callers can chain off it.

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn help(&mut self, help: impl Into<String>) -> &mut Self {
        self.help = Some(help.into());
        self
    }

    pub fn default_value(&mut self, default: impl Into<String>) -> &mut Self {
        self.default = Some(default.into());
        self
    }

    pub fn required(&mut self, required: bool) -> &mut Self {
        self.required = required;
        self
    }

    pub fn value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    pub fn class(&mut self, class: impl Into<String>) -> &mut Self {
        self.classes.push(class.into());
        self
    }

    pub fn options(&mut self, options: Vec<SelectOption>) -> &mut Self {
        self.options = options;
        self
    }

    pub fn width(&mut self, width: impl Into<String>) -> &mut Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(&mut self, height: impl Into<String>) -> &mut Self {
        self.height = Some(height.into());
        self
    }

    /// True when the bound value is truthy (present, non-empty, not `"0"`).
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self.value.as_deref(), None | Some("") | Some("0"))
    }

    /// The type's own class joined with any instance classes, for the
    /// `class` attribute.
    #[must_use]
    pub fn class_attribute(&self, type_class: &str) -> String {
        let mut classes = vec![type_class.to_string()];
        classes.extend(self.classes.iter().cloned());
        classes.join(" ")
    }
}

/// Admin-context binding: with no submission in flight and no bound value,
/// the instance takes its configured default.
pub fn bind_admin(instance: &mut FieldInstance, submission: Option<&Submission>) {
    if submission.is_none() && instance.value.is_none() {
        instance.value = instance.default.clone();
    }
}

/// Frontend-context binding: an unbound instance prefers the truthy
/// submitted value and falls back to its default, including when a
/// submission is present but this field's value is absent or falsy.
pub fn bind_frontend(instance: &mut FieldInstance, submission: Option<&Submission>) {
    if instance.value.is_some() {
        return;
    }
    instance.value = match submission {
        None => instance.default.clone(),
        Some(sub) => sub
            .truthy(&instance.name)
            .map(str::to_string)
            .or_else(|| instance.default.clone()),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_instance_is_not_truthy() {
        let instance = FieldInstance::new("active");
        assert!(!instance.is_truthy());
    }

    #[test]
    fn zero_and_empty_are_not_truthy() {
        let mut instance = FieldInstance::new("active");
        instance.value("0");
        assert!(!instance.is_truthy());
        instance.value("");
        assert!(!instance.is_truthy());
        instance.value("1");
        assert!(instance.is_truthy());
    }

    #[test]
    fn admin_binding_uses_default_only_without_submission() {
        let mut instance = FieldInstance::new("active");
        instance.default_value("checked");

        let submission = Submission::new();
        bind_admin(&mut instance, Some(&submission));
        assert_eq!(instance.value, None);

        bind_admin(&mut instance, None);
        assert_eq!(instance.value.as_deref(), Some("checked"));
    }

    #[test]
    fn admin_binding_never_overwrites_a_bound_value() {
        let mut instance = FieldInstance::new("active");
        instance.default_value("checked");
        instance.value("explicit");
        bind_admin(&mut instance, None);
        assert_eq!(instance.value.as_deref(), Some("explicit"));
    }

    #[test]
    fn frontend_binding_prefers_truthy_submission() {
        let mut instance = FieldInstance::new("active");
        instance.default_value("fallback");

        let mut submission = Submission::new();
        submission.set("active", "1");
        bind_frontend(&mut instance, Some(&submission));
        assert_eq!(instance.value.as_deref(), Some("1"));
    }

    #[test]
    fn frontend_binding_falls_back_to_default_on_falsy_submission() {
        let mut instance = FieldInstance::new("active");
        instance.default_value("fallback");

        let mut submission = Submission::new();
        submission.set("active", "0");
        bind_frontend(&mut instance, Some(&submission));
        assert_eq!(instance.value.as_deref(), Some("fallback"));
    }

    #[test]
    fn class_attribute_prepends_type_class() {
        let mut instance = FieldInstance::new("active");
        instance.class("wide").class("accent");
        assert_eq!(instance.class_attribute("checkbox"), "checkbox wide accent");
    }
}
