//! Option flags for the C# styles.

use serde::Deserialize;

/// Flags for C# DTO classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CSharpDtoOptions {
    /// `get;` accessor. Without either accessor members are public fields.
    pub getter: bool,
    /// `set;` accessor. Implies `get;`.
    pub setter: bool,
    /// Mark nullable columns with `?`.
    pub nullable: bool,
    /// camelCase member names instead of PascalCase.
    pub camel_case_properties: bool,
    /// `[JsonPropertyName("column_name")]` on each member.
    pub json_property_name: bool,
    pub extra_spacing: bool,
}

/// Flags for C# records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CSharpRecordOptions {
    /// Primary-constructor record instead of a property body.
    pub positional: bool,
    /// `init;` instead of `set;` for body properties.
    pub with_init: bool,
    pub nullable: bool,
    pub camel_case_properties: bool,
    pub json_property_name: bool,
    pub extra_spacing: bool,
}
