//! Component template expansion
//!
//! A component body is plain text with `{{key}}` placeholders. Each
//! named argument replaces every occurrence of its placeholder with
//! the rendered value; placeholders with no matching argument are left
//! in the output untouched.

use crate::weave::values::Value;

/// Expand `{{key}}` placeholders in a component template.
pub fn expand_component(template: &str, args: &[(String, Value)]) -> String {
    let mut expanded = template.to_string();
    for (key, value) in args {
        expanded = expanded.replace(&format!("{{{{{}}}}}", key), &value.to_string());
    }
    expanded
}
