//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "user_account" -> "UserAccount")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| capitalize(&normalize_segment(part)))
        .collect()
}

/// Convert a string to camelCase (e.g., "created_at" -> "createdAt")
pub fn to_camel_case(s: &str) -> String {
    let mut parts = s
        .split('_')
        .filter(|part| !part.is_empty())
        .map(normalize_segment);

    let Some(first) = parts.next() else {
        return String::new();
    };

    let mut result = decapitalize(&first);
    for part in parts {
        result.push_str(&capitalize(&part));
    }
    result
}

/// Emitted type name for a table: `prefix + PascalCase(table) + suffix`.
pub fn type_name(prefix: &str, table: &str, suffix: &str) -> String {
    format!("{}{}{}", prefix, to_pascal_case(table), suffix)
}

/// Lower-case a segment unless it already carries inner capitals (`userId`).
fn normalize_segment(part: &str) -> String {
    let has_upper = part.chars().any(|c| c.is_uppercase());
    let has_lower = part.chars().any(|c| c.is_lowercase());

    if has_upper && has_lower {
        part.to_string()
    } else {
        part.to_lowercase()
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn decapitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
