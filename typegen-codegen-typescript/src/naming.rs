//! TypeScript-specific naming conventions.

use typegen_core::to_camel_case;

/// Property name for a column: camelCase, quoted when the result is not a
/// valid identifier (e.g. columns starting with a digit or containing `-`).
///
/// Reserved words need no escaping in property position.
pub fn property_name(column: &str) -> String {
    let name = to_camel_case(column);
    if is_identifier(&name) {
        name
    } else {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

/// Column comment made safe for a one-line `//` or `/** */` comment.
///
/// Line breaks collapse to single spaces and `*/` is broken up.
pub fn comment_text(comment: &str) -> String {
    comment
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "*\\/")
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
