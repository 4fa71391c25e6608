//! Option flags for the Java styles.

use serde::Deserialize;

/// Flags for Lombok DTO classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JavaDtoOptions {
    pub getter: bool,
    pub setter: bool,
    /// `@Data`; supersedes `getter` and `setter`.
    pub data: bool,
    pub no_args_constructor: bool,
    pub all_args_constructor: bool,
    pub builder: bool,
    /// `implements Serializable`
    pub serializable: bool,
    /// `@Schema(description = ...)` from the column comment.
    pub swagger_annotations: bool,
    /// `@JsonProperty("camelName")`
    pub jackson_annotations: bool,
    pub extra_spacing: bool,
}

/// Flags for `record` declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JavaRecordOptions {
    pub builder: bool,
    pub swagger_annotations: bool,
    pub jackson_annotations: bool,
    pub extra_spacing: bool,
}

/// Statement selection for MyBatis mappers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MyBatisOptions {
    /// Every statement; overrides the individual flags.
    pub all_crud: bool,
    pub select: bool,
    pub insert: bool,
    pub update: bool,
    pub delete: bool,
}

impl MyBatisOptions {
    pub fn wants_select(&self) -> bool {
        self.all_crud || self.select
    }

    pub fn wants_insert(&self) -> bool {
        self.all_crud || self.insert
    }

    pub fn wants_update(&self) -> bool {
        self.all_crud || self.update
    }

    pub fn wants_delete(&self) -> bool {
        self.all_crud || self.delete
    }
}
