//! Java bean naming conventions.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `name` | [`capitalize`] | `Name` |
//! | `String`, `name` | [`getter_name`] | `getName` |
//! | `boolean`, `valid` | [`getter_name`] | `isValid` |
//! | `name` | [`setter_name`] | `setName` |

use crate::types::TypeRef;

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use beanweave_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("World"), "World");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Bean getter for a property of type `ty`: `is` for boolean and `Boolean`, else `get`.
pub fn getter_name(ty: &TypeRef, name: &str) -> String {
    let prefix = if ty.is_boolean_like() { "is" } else { "get" };
    format!("{}{}", prefix, capitalize(name))
}

/// Bean setter for a property.
pub fn setter_name(name: &str) -> String {
    format!("set{}", capitalize(name))
}

/// The property part of an accessor name, e.g. `Line` for `getLine`.
///
/// Returns `None` if `method` does not start with `prefix` or nothing follows it.
pub fn strip_accessor<'a>(method: &'a str, prefix: &str) -> Option<&'a str> {
    method.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}
