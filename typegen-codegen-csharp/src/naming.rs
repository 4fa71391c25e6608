//! C#-specific naming conventions.

use typegen_core::{to_camel_case, to_pascal_case};

const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Member name for a column: PascalCase, or camelCase when `camel` is set.
///
/// camelCase names that collide with a keyword are escaped as `@name`.
pub fn property_name(column: &str, camel: bool) -> String {
    if !camel {
        return to_pascal_case(column);
    }

    let name = to_camel_case(column);
    if RESERVED_WORDS.contains(&name.as_str()) {
        format!("@{}", name)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_by_default() {
        assert_eq!(property_name("created_at", false), "CreatedAt");
        assert_eq!(property_name("class", false), "Class");
    }

    #[test]
    fn test_camel_case_escapes_keywords() {
        assert_eq!(property_name("created_at", true), "createdAt");
        assert_eq!(property_name("event", true), "@event");
        assert_eq!(property_name("events", true), "events");
    }
}
