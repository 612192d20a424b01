//! Built-in field types.
//!
//! Checkbox is the reference implementation of the contract; text, textarea
//! and select exist both as host-usable types and because the configuration
//! meta-form is built from them.

mod checkbox;
mod select;
mod text;
mod textarea;

pub use checkbox::Checkbox;
pub use select::Select;
pub use text::Text;
pub use textarea::Textarea;

use crate::instance::FieldInstance;
use crate::types::FieldDefinition;
use lattice_types::Submission;

/// Admin markup wrapper shared by the built-in types: label + widget +
/// optional help block inside a list item.
fn wrap_admin(instance: &FieldInstance, widget: &str) -> String {
    let help = match instance.help.as_deref() {
        Some(text) if !text.is_empty() => format!("<div class=\"help\">{text}</div>"),
        _ => String::new(),
    };
    format!(
        "<li>\n    <label for=\"{}\">{}</label>\n    {}\n    {}\n</li>",
        instance.name, instance.label, widget, help
    )
}

/// Maps the common configuration-form keys (name, type, help, required)
/// into a definition record; the caller fills the type-specific `default`.
fn base_definition(submission: &Submission) -> FieldDefinition {
    FieldDefinition {
        name: submission.get("name").unwrap_or_default().to_string(),
        field_type: submission.get("type").unwrap_or_default().to_string(),
        default: String::new(),
        help: submission.get("help").unwrap_or_default().to_string(),
        required: submission.truthy("required").is_some(),
    }
}
