//! Type mapping between engine column types and language-specific types.

use crate::Engine;

/// Trait for mapping engine column types to language-specific type strings.
///
/// Implement this trait for each target language. Implementors only provide
/// the scalar tables; normalization, array handling and the unknown fallback
/// are shared.
pub trait TypeMapper {
    /// Sentinel type used when a column type has no mapping.
    fn unknown(&self) -> &'static str;

    /// Map a normalized, non-array type name for the given engine.
    fn map_scalar(&self, engine: Engine, raw: &str) -> Option<&'static str>;

    /// Wrap an element type in the language's array form.
    fn array_of(&self, element: &str) -> String {
        format!("{}[]", element)
    }

    /// Map a raw engine type name. Never fails: unmapped names resolve to
    /// [`TypeMapper::unknown`].
    fn map_type(&self, engine: Engine, raw: &str) -> String {
        let normalized = normalize_type_name(raw);

        if let Some(element) = engine.array_element(&normalized) {
            let element = self.map_scalar(engine, element).unwrap_or(self.unknown());
            return self.array_of(element);
        }

        self.map_scalar(engine, &normalized)
            .unwrap_or(self.unknown())
            .to_string()
    }
}

/// Lower-case a type name, drop length/precision arguments and collapse whitespace.
///
/// `VARCHAR(50)` becomes `varchar`, `Timestamp(6)  With Time Zone` becomes
/// `timestamp with time zone`.
pub fn normalize_type_name(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut depth = 0usize;

    for c in raw.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => stripped.push(c),
            _ => {}
        }
    }

    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TinyMapper;

    impl TypeMapper for TinyMapper {
        fn unknown(&self) -> &'static str {
            "?"
        }

        fn map_scalar(&self, _engine: Engine, raw: &str) -> Option<&'static str> {
            match raw {
                "int" | "int4" => Some("Int"),
                "timestamp with time zone" => Some("Instant"),
                _ => None,
            }
        }
    }

    #[test]
    fn test_normalize_type_name() {
        assert_eq!(normalize_type_name("VARCHAR(50)"), "varchar");
        assert_eq!(normalize_type_name(" decimal(10, 2) "), "decimal");
        assert_eq!(
            normalize_type_name("Timestamp(6)  With Time Zone"),
            "timestamp with time zone"
        );
        assert_eq!(normalize_type_name("_INT4"), "_int4");
    }

    #[test]
    fn test_map_type_is_case_insensitive() {
        assert_eq!(TinyMapper.map_type(Engine::MySql, "INT"), "Int");
        assert_eq!(TinyMapper.map_type(Engine::MySql, "int"), "Int");
    }

    #[test]
    fn test_map_type_unknown_sentinel() {
        assert_eq!(TinyMapper.map_type(Engine::MySql, "geometry"), "?");
    }

    #[test]
    fn test_map_type_arrays() {
        assert_eq!(TinyMapper.map_type(Engine::Postgres, "_int4"), "Int[]");
        assert_eq!(TinyMapper.map_type(Engine::Postgres, "int[]"), "Int[]");
        assert_eq!(TinyMapper.map_type(Engine::Postgres, "_box"), "?[]");
        // Only Postgres has array types
        assert_eq!(TinyMapper.map_type(Engine::MySql, "_int4"), "?");
    }
}
