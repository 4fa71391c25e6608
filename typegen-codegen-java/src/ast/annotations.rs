//! Typed Java annotations for semantic code generation.
//!
//! Instead of passing raw strings like `"@JsonProperty(\"id\")"`, use typed
//! annotations that are rendered to the appropriate syntax.

use std::fmt;

/// Annotation placed on a type or a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// `@Data`
    Data,
    /// `@Getter`
    Getter,
    /// `@Setter`
    Setter,
    /// `@NoArgsConstructor`
    NoArgsConstructor,
    /// `@AllArgsConstructor`
    AllArgsConstructor,
    /// `@Builder`
    Builder,
    /// `@Mapper`
    Mapper,
    /// `@Schema(description = "...")`
    Schema(String),
    /// `@JsonProperty("...")`
    JsonProperty(String),
}

impl Annotation {
    /// Create a Swagger schema description annotation.
    pub fn schema(description: impl Into<String>) -> Self {
        Self::Schema(description.into())
    }

    /// Create a Jackson property name annotation.
    pub fn json_property(name: impl Into<String>) -> Self {
        Self::JsonProperty(name.into())
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data => write!(f, "@Data"),
            Self::Getter => write!(f, "@Getter"),
            Self::Setter => write!(f, "@Setter"),
            Self::NoArgsConstructor => write!(f, "@NoArgsConstructor"),
            Self::AllArgsConstructor => write!(f, "@AllArgsConstructor"),
            Self::Builder => write!(f, "@Builder"),
            Self::Mapper => write!(f, "@Mapper"),
            Self::Schema(description) => {
                write!(f, "@Schema(description = {})", string_literal(description))
            }
            Self::JsonProperty(name) => write!(f, "@JsonProperty({})", string_literal(name)),
        }
    }
}

/// Quote `value` as a Java string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
