//! Nullable type wrapping.

const VALUE_TYPES: &[&str] = &[
    "bool",
    "byte",
    "sbyte",
    "short",
    "ushort",
    "int",
    "uint",
    "long",
    "ulong",
    "float",
    "double",
    "decimal",
    "char",
    "DateTime",
    "DateTimeOffset",
    "DateOnly",
    "TimeOnly",
    "TimeSpan",
    "Guid",
];

/// Whether `ty` is a C# value type (struct), which needs `Nullable<T>` to hold null.
pub fn is_value_type(ty: &str) -> bool {
    VALUE_TYPES.contains(&ty.trim_end_matches('?'))
}

/// Mark `ty` nullable.
///
/// Value types become `T?` exactly once; reference types gain `?` unless
/// they already carry one.
pub fn make_nullable(ty: &str) -> String {
    if is_value_type(ty) {
        format!("{}?", ty.trim_end_matches('?'))
    } else if ty.ends_with('?') {
        ty.to_string()
    } else {
        format!("{}?", ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types() {
        assert!(is_value_type("int"));
        assert!(is_value_type("DateTimeOffset"));
        assert!(is_value_type("Guid?"));
        assert!(!is_value_type("string"));
        assert!(!is_value_type("byte[]"));
        assert!(!is_value_type("object"));
    }

    #[test]
    fn test_value_type_wrapped_once() {
        assert_eq!(make_nullable("int"), "int?");
        assert_eq!(make_nullable("int?"), "int?");
        assert_eq!(make_nullable(&make_nullable("DateTime")), "DateTime?");
    }

    #[test]
    fn test_reference_type_never_double_wrapped() {
        assert_eq!(make_nullable("string"), "string?");
        assert_eq!(make_nullable("string?"), "string?");
        assert_eq!(make_nullable("byte[]"), "byte[]?");
    }
}
