use miette::Diagnostic;
use thiserror::Error;
use typegen_core::StreamError;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure producing one unit of generated source.
///
/// Every variant is terminal for the unit that raised it.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid options for style '{style}': {reason}")]
    #[diagnostic(
        code(typegen::invalid_options),
        help("options must be a JSON object whose values are booleans")
    )]
    InvalidOptions { style: String, reason: String },

    #[error("unsupported language/style '{language}/{style}'")]
    #[diagnostic(
        code(typegen::unsupported_target),
        help("run 'typegen list' to see the supported language/style pairs")
    )]
    UnsupportedTarget { language: String, style: String },

    #[error("failed to read columns of table '{table}'")]
    #[diagnostic(code(typegen::stream_error))]
    Stream {
        table: String,
        #[source]
        source: StreamError,
    },
}

impl Error {
    pub fn invalid_options(style: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidOptions {
            style: style.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported_target(language: impl Into<String>, style: impl Into<String>) -> Self {
        Error::UnsupportedTarget {
            language: language.into(),
            style: style.into(),
        }
    }

    pub fn stream(table: impl Into<String>, source: StreamError) -> Self {
        Error::Stream {
            table: table.into(),
            source,
        }
    }
}
