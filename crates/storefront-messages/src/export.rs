//! Rendering a catalog back to its exported-object form.
//!
//! [`render_module`] produces the `export default { ... }` module that UI
//! code imports directly. With the `serde` feature, [`to_json`] produces the
//! same nesting as JSON. [`crate::source`] reads that text back.

use crate::catalog::MessageCatalog;

/// Render the catalog as an `export default` module.
///
/// Two-space indentation, trailing commas, double-quoted values. Keys that
/// are not plain identifiers are quoted.
#[must_use]
pub fn render_module(catalog: &MessageCatalog) -> String {
    let mut out = String::from("export default {\n");
    for section in catalog.sections() {
        out.push_str(&format!("  {}: {{\n", object_key(section.name())));
        for (key, text) in section.iter() {
            out.push_str(&format!("    {}: {},\n", object_key(key), quote(text)));
        }
        out.push_str("  },\n");
    }
    out.push_str("};\n");
    out
}

/// Serialize the catalog as pretty-printed JSON, sections and keys in
/// declaration order.
#[cfg(feature = "serde")]
pub fn to_json(catalog: &MessageCatalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(catalog)
}

fn object_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn quote(text: &str) -> String {
    format!("\"{}\"", escape(text))
}

/// Escape `text` for use between double quotes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
