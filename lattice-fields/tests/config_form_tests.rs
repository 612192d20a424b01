use lattice_fields::{
    FieldConfigForm, FieldDefinition, FieldError, FieldType, FieldTypeRegistry, SelectOption,
};
use lattice_types::Submission;
use pretty_assertions::assert_eq;

fn registry() -> FieldTypeRegistry {
    FieldTypeRegistry::with_builtins().unwrap()
}

// ── Builder ───────────────────────────────────────────────────────

#[test]
fn fresh_form_is_empty() {
    let form = FieldConfigForm::new();
    assert!(form.is_empty());
    assert_eq!(form.len(), 0);
}

#[test]
fn add_field_with_unknown_type_fails() {
    let registry = registry();
    let mut form = FieldConfigForm::new();
    let result = form.add_field(&registry, "no-such-type");
    assert!(matches!(result, Err(FieldError::UnknownType(_))));
    assert!(form.is_empty());
}

#[test]
fn fluent_setters_chain_off_added_field() {
    let registry = registry();
    let mut form = FieldConfigForm::new();
    let field = form.add_field(&registry, "select").unwrap();
    field
        .label("Default State")
        .name("default")
        .options(vec![
            SelectOption::new("checked", "Checked"),
            SelectOption::new("unchecked", "Unchecked"),
        ]);
    assert_eq!(form.len(), 1);

    let markup = form.output_admin();
    assert!(markup.contains("<label for=\"default\">Default State</label>"));
    assert!(markup.contains("<option value=\"checked\">Checked</option>"));
}

#[test]
fn separate_forms_share_no_state() {
    let registry = registry();

    let mut first = FieldConfigForm::new();
    first
        .add_field(&registry, "text")
        .unwrap()
        .name("leftover")
        .label("Leftover");

    let mut second = FieldConfigForm::new();
    second
        .add_field(&registry, "text")
        .unwrap()
        .name("fresh")
        .label("Fresh");

    let markup = second.output_admin();
    assert!(markup.contains("fresh"));
    assert!(!markup.contains("leftover"));
}

// ── Reflexive configuration form (checkbox configured by a form of
//    select + textarea + checkbox) ─────────────────────────────────

#[test]
fn checkbox_configuration_form_contains_its_three_settings() {
    let registry = registry();
    let checkbox = registry.require("checkbox").unwrap();
    let markup = checkbox.configuration_form(&registry, None).unwrap();

    assert!(markup.contains("<label for=\"default\">Default State</label>"));
    assert!(markup.contains("<option value=\"checked\">Checked</option>"));
    assert!(markup.contains("<option value=\"unchecked\">Unchecked</option>"));

    assert!(markup.contains("<label for=\"help\">Help Text</label>"));
    assert!(markup.contains("style=\"width: 500px; height: 80px\""));

    assert!(markup.contains("<label for=\"required\">Required Field</label>"));
    assert!(markup.contains("type=\"checkbox\""));
}

#[test]
fn checkbox_configuration_form_prefills_from_definition() {
    let registry = registry();
    let checkbox = registry.require("checkbox").unwrap();
    let definition = FieldDefinition {
        name: "notify".into(),
        field_type: "checkbox".into(),
        default: "checked".into(),
        help: "Tick to receive mail.".into(),
        required: true,
    };
    let markup = checkbox
        .configuration_form(&registry, Some(&definition))
        .unwrap();

    // Stored default "checked" selects the matching option.
    assert!(markup.contains("<option value=\"checked\" selected=\"selected\">Checked</option>"));
    // Help text round-trips into the textarea content.
    assert!(markup.contains(">Tick to receive mail.</textarea>"));
    // Required flag renders its checkbox checked.
    assert!(markup.contains("checked=\"checked\""));
}

#[test]
fn checkbox_configuration_form_prefills_empty_default_as_unchecked() {
    let registry = registry();
    let checkbox = registry.require("checkbox").unwrap();
    let definition = FieldDefinition {
        name: "notify".into(),
        field_type: "checkbox".into(),
        default: String::new(),
        help: String::new(),
        required: false,
    };
    let markup = checkbox
        .configuration_form(&registry, Some(&definition))
        .unwrap();
    assert!(markup.contains("<option value=\"unchecked\" selected=\"selected\">Unchecked</option>"));
}

// ── Configuration submission processing ───────────────────────────

#[test]
fn checkbox_submission_normalizes_default_and_required() {
    let registry = registry();
    let checkbox = registry.require("checkbox").unwrap();

    let submission: Submission = [
        ("name", "notify"),
        ("type", "checkbox"),
        ("default", "checked"),
        ("help", "Tick to receive mail."),
        ("required", "1"),
    ]
    .into_iter()
    .collect();

    let definition = checkbox.process_configuration_submission(&submission);
    assert_eq!(
        definition,
        FieldDefinition {
            name: "notify".into(),
            field_type: "checkbox".into(),
            default: "checked".into(),
            help: "Tick to receive mail.".into(),
            required: true,
        }
    );
}

#[test]
fn checkbox_submission_with_unchecked_default_normalizes_to_empty() {
    let registry = registry();
    let checkbox = registry.require("checkbox").unwrap();

    let submission: Submission = [
        ("name", "notify"),
        ("type", "checkbox"),
        ("default", "unchecked"),
        ("help", ""),
        ("required", "0"),
    ]
    .into_iter()
    .collect();

    let definition = checkbox.process_configuration_submission(&submission);
    assert_eq!(definition.default, "");
    assert!(!definition.required);
}

#[test]
fn field_definition_serializes_for_the_host() {
    // The host persists this record as-is; key names are part of the contract.
    let definition = FieldDefinition {
        name: "notify".into(),
        field_type: "checkbox".into(),
        default: "checked".into(),
        help: String::new(),
        required: true,
    };
    let json = serde_json::to_value(&definition).unwrap();
    assert_eq!(json["name"], "notify");
    assert_eq!(json["field_type"], "checkbox");
    assert_eq!(json["default"], "checked");
    assert_eq!(json["required"], true);
}

#[test]
fn missing_submission_keys_produce_empty_definition_fields() {
    let registry = registry();
    let checkbox = registry.require("checkbox").unwrap();
    let definition = checkbox.process_configuration_submission(&Submission::new());
    assert_eq!(definition.name, "");
    assert_eq!(definition.field_type, "");
    assert_eq!(definition.default, "");
    assert!(!definition.required);
}
