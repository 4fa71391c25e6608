//! Typed C# attributes.

use std::fmt;

/// Namespace providing [`Attribute::JsonPropertyName`].
pub const JSON_SERIALIZATION: &str = "System.Text.Json.Serialization";

/// Attribute placed on a member or a record parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// `[JsonPropertyName("...")]`
    JsonPropertyName(String),
}

impl Attribute {
    pub fn json_property_name(name: impl Into<String>) -> Self {
        Self::JsonPropertyName(name.into())
    }

    /// Required namespace import.
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::JsonPropertyName(_) => JSON_SERIALIZATION,
        }
    }

    /// Render with an explicit target, e.g. `[property: JsonPropertyName("id")]`.
    pub fn targeted(&self, target: &str) -> String {
        format!("[{}: {}]", target, self.body())
    }

    fn body(&self) -> String {
        match self {
            Self::JsonPropertyName(name) => {
                format!("JsonPropertyName(\"{}\")", escape(name))
            }
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.body())
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
