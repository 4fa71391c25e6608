//! Option flags for the TypeScript styles.

use serde::Deserialize;

/// Flags for `interface`, `class` and `type` output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeScriptOptions {
    /// Export the declaration (`export default` for classes).
    pub export_all_types: bool,
    pub readonly_properties: bool,
    /// Mark every property optional regardless of column nullability.
    pub optional_properties: bool,
    /// Type nullable columns as `T | null` instead of marking them `?`.
    pub strict_null_checks: bool,
    pub comments: bool,
    pub js_doc_comments: bool,
    /// Follow the declaration with a `Partial<Name>` alias.
    pub partial_type: bool,
    /// Follow the declaration with a `Readonly<Name>` alias.
    pub readonly_type: bool,
    pub extra_spacing: bool,
}

/// Flags for Zod schema output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZodOptions {
    /// Follow the schema with a `z.infer` type alias.
    pub export_all_types: bool,
    pub all_optional: bool,
    pub comments: bool,
    /// Chain `.nullable()` on every field, not only nullable columns.
    pub nullable: bool,
    /// Chain `.nullish()` on every field in place of `.nullable()`/`.optional()`.
    pub nullish: bool,
    /// Bound string fields by the column's maximum length.
    pub max_value: bool,
    pub trim: bool,
}
