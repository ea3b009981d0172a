//! Naming contexts for anonymous records and enums.
//!
//! A context is the implied name threaded through resolution. It only becomes
//! visible when a record or enum has no explicit name. Derived names are not
//! checked for uniqueness here.

/// Suffix for the items of an array.
pub const ITEM_SUFFIX: &str = "Item";
/// Suffix for the values of a map.
pub const VALUE_SUFFIX: &str = "Value";
/// Suffix for an anonymous enum.
pub const ENUM_SUFFIX: &str = "Enum";

/// Derives a child context by appending a suffix token.
#[must_use]
pub fn derive_name(parent: &str, token: &str) -> String {
    let mut name = String::with_capacity(parent.len() + token.len());
    name.push_str(parent);
    name.push_str(token);
    name
}

/// Derives the context of a record field: `Parent_field`.
#[must_use]
pub fn field_context(parent: &str, field: &str) -> String {
    format!("{parent}_{field}")
}
