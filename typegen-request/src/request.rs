//! Generation request decoding.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result, SourceContext};

/// Serialization format of a request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Json,
    Toml,
}

impl RequestFormat {
    /// Pick the format from a file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => RequestFormat::Toml,
            _ => RequestFormat::Json,
        }
    }
}

/// One generation request: a target, naming affixes, tables and style options.
///
/// ```json
/// {
///   "language": "typescript",
///   "style": "interface",
///   "prefix": "I",
///   "tableNames": ["users", "orders"],
///   "options": { "exportAllTypes": true }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub language: String,
    pub style: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    /// Tables in output order.
    #[serde(alias = "table_names")]
    pub table_names: Vec<String>,
    /// Opaque per-style payload, decoded by the selected emitter.
    #[serde(default)]
    pub options: Value,
}

impl GenerationRequest {
    /// Read and decode a request file, choosing the format by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(
            &content,
            &path.display().to_string(),
            RequestFormat::from_path(path),
        )
    }

    /// Decode a JSON request.
    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, "request.json", RequestFormat::Json)
    }

    /// Decode a TOML request.
    pub fn from_toml(content: &str) -> Result<Self> {
        Self::from_str_with_filename(content, "request.toml", RequestFormat::Toml)
    }

    /// Decode a request with a custom filename for error reporting.
    pub fn from_str_with_filename(
        content: &str,
        filename: &str,
        format: RequestFormat,
    ) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let request: GenerationRequest = match format {
            RequestFormat::Json => serde_json::from_str(content).map_err(|e| ctx.json_error(e))?,
            RequestFormat::Toml => toml::from_str(content).map_err(|e| ctx.toml_error(e))?,
        };
        request.validate(&ctx)?;
        Ok(request)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(ctx.validation_error("language must not be empty", Some("language")));
        }
        if self.style.trim().is_empty() {
            return Err(ctx.validation_error("style must not be empty", Some("style")));
        }
        for name in &self.table_names {
            if name.trim().is_empty() {
                return Err(ctx.validation_error("table names must not be blank", Some(name)));
            }
        }
        Ok(())
    }
}
