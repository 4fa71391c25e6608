//! Java-specific naming conventions.

use typegen_core::to_camel_case;

const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
    "_",
];

/// Field name for a column: camelCase, with a trailing `_` on reserved words.
///
/// The JSON name used by `@JsonProperty` is the unescaped camelCase form.
pub fn field_name(column: &str) -> String {
    let name = to_camel_case(column);
    if RESERVED_WORDS.contains(&name.as_str()) {
        format!("{}_", name)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("created_at"), "createdAt");
        assert_eq!(field_name("USER_ID"), "userId");
    }

    #[test]
    fn test_reserved_words_are_escaped() {
        assert_eq!(field_name("class"), "class_");
        assert_eq!(field_name("DEFAULT"), "default_");
        assert_eq!(field_name("classes"), "classes");
    }
}
