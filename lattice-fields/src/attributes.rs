//! HTML attribute assembly shared by all field types.

use std::collections::BTreeMap;

/// Mapping of attribute name → value for one HTML tag.
///
/// Boolean attributes (`checked`, `selected`) are represented by presence of
/// the key with the value equal to the attribute name itself.
pub type AttributeSet = BTreeMap<String, String>;

/// Serializes an attribute set into a single string ready for embedding in
/// a tag, e.g. `name="color" type="checkbox" value="1"`.
///
/// Values are quoted as-is; output-context escaping is the responsibility of
/// the host templating layer.
#[must_use]
pub fn compile_attributes(attributes: &AttributeSet) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ")
}
