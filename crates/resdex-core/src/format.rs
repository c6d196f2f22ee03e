//! Canonical textual rendering of type descriptors.
//!
//! [`format`] is the canonical form (`T`, `[]T`, `map[K]V`). [`format_linked`]
//! is the Markdown flavour used on resource pages: simple names that are
//! resources in the same snapshot become links, and list brackets are
//! written as HTML entities so the link right after them still renders.

use std::collections::HashSet;

use crate::model::TypeDescriptor;

/// Marker rendered for a descriptor with no variant populated
pub const UNKNOWN_TYPE: &str = "?";

/// Render a type descriptor in canonical form.
///
/// Total and pure. Nested descriptors are rendered outermost first, so
/// `List(Map("string", List(Simple("int"))))` becomes `[]map[string][]int`.
///
/// ```
/// use resdex_core::format::format;
/// use resdex_core::model::TypeDescriptor;
///
/// let t = TypeDescriptor::map("string", TypeDescriptor::list(TypeDescriptor::simple("int")));
/// assert_eq!(format(&t), "map[string][]int");
/// ```
pub fn format(t: &TypeDescriptor) -> String {
    let mut out = String::new();
    write_type(&mut out, t, &mut |out, name| out.push_str(name), "[]");
    out
}

/// Render a type descriptor for a Markdown page.
///
/// Simple names found in `known_resources` are rendered as
/// `[name](name.md)` with a lower-cased target.
pub fn format_linked(t: &TypeDescriptor, known_resources: &HashSet<String>) -> String {
    let mut out = String::new();
    write_type(
        &mut out,
        t,
        &mut |out, name| {
            if known_resources.contains(name) {
                out.push_str(&format!("[{}]({})", name, resource_page_ref(name)));
            } else {
                out.push_str(name);
            }
        },
        "&#91;&#93;",
    );
    out
}

/// Relative page file name for a resource id
pub fn resource_page_ref(id: &str) -> String {
    format!("{}.md", id.to_lowercase())
}

/// Whether [`resource_page_ref`] of `id` stays a plain file name.
///
/// Path separators and `..` would let a page land outside its directory.
pub fn is_safe_page_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(|c: char| c == '/' || c == '\\') && !id.contains("..")
}

// Prefixes are emitted on the way down; only the innermost node calls `simple`.
fn write_type(
    out: &mut String,
    t: &TypeDescriptor,
    simple: &mut dyn FnMut(&mut String, &str),
    list_prefix: &str,
) {
    let mut node = t;
    loop {
        match node {
            TypeDescriptor::Simple { name } => {
                simple(out, name);
                return;
            }
            TypeDescriptor::List { element } => {
                out.push_str(list_prefix);
                node = element;
            }
            TypeDescriptor::Map { key_name, value } => {
                out.push_str("map[");
                out.push_str(key_name);
                out.push(']');
                node = value;
            }
            TypeDescriptor::Unknown => {
                out.push_str(UNKNOWN_TYPE);
                return;
            }
        }
    }
}
