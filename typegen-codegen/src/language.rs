//! Target languages and output styles.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    Java,
    CSharp,
    TypeScript,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::TypeScript => "typescript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "csharp" | "cs" | "c#" => Ok(Language::CSharp),
            "typescript" | "ts" => Ok(Language::TypeScript),
            _ => Err(format!(
                "unknown language '{}', expected 'java', 'csharp' or 'typescript'",
                s
            )),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Shape of the generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Mutable data-transfer class.
    Dto,
    /// Immutable record.
    Record,
    /// TypeScript `interface`.
    Interface,
    /// TypeScript `class`.
    Class,
    /// TypeScript object `type` alias.
    Type,
    /// Zod runtime validation schema.
    Zod,
    /// MyBatis XML mapper.
    MyBatisXml,
    /// MyBatis annotated mapper interface.
    MyBatisAnnotation,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Dto => "dto",
            Style::Record => "record",
            Style::Interface => "interface",
            Style::Class => "class",
            Style::Type => "type",
            Style::Zod => "zod",
            Style::MyBatisXml => "mybatis-xml",
            Style::MyBatisAnnotation => "mybatis-annotation",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dto" => Ok(Style::Dto),
            "record" => Ok(Style::Record),
            "interface" => Ok(Style::Interface),
            "class" => Ok(Style::Class),
            "type" => Ok(Style::Type),
            "zod" => Ok(Style::Zod),
            "mybatis-xml" | "mybatis" | "xml" => Ok(Style::MyBatisXml),
            "mybatis-annotation" | "annotation" => Ok(Style::MyBatisAnnotation),
            _ => Err(format!("unknown style '{}'", s)),
        }
    }
}
