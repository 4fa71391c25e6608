//! Generator registry.
//!
//! Maps a (language, style) key to the emitter that implements it. The set
//! of targets is closed; resolution of any other pair fails before column
//! metadata is touched.

use std::fmt;

use serde_json::Value;
use typegen_codegen::{EmitContext, Emitter, Error, Language, Result, Style};
use typegen_codegen_csharp::{
    CSharpDtoEmitter, CSharpDtoOptions, CSharpRecordEmitter, CSharpRecordOptions,
};
use typegen_codegen_java::{
    JavaDtoEmitter, JavaDtoOptions, JavaRecordEmitter, JavaRecordOptions,
    MyBatisAnnotationEmitter, MyBatisOptions, MyBatisXmlEmitter,
};
use typegen_codegen_typescript::{
    DeclKind, TypeScriptEmitter, TypeScriptOptions, ZodEmitter, ZodOptions,
};
use typegen_core::{ColumnResult, ordered};

/// A supported (language, style) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    JavaDto,
    JavaRecord,
    JavaMyBatisXml,
    JavaMyBatisAnnotation,
    CSharpDto,
    CSharpRecord,
    TypeScriptInterface,
    TypeScriptClass,
    TypeScriptType,
    TypeScriptZod,
}

impl Target {
    const ALL: [Target; 10] = [
        Target::JavaDto,
        Target::JavaRecord,
        Target::JavaMyBatisXml,
        Target::JavaMyBatisAnnotation,
        Target::CSharpDto,
        Target::CSharpRecord,
        Target::TypeScriptInterface,
        Target::TypeScriptClass,
        Target::TypeScriptType,
        Target::TypeScriptZod,
    ];

    /// Every registered target, grouped by language.
    pub fn all() -> &'static [Target] {
        &Self::ALL
    }

    pub fn language(&self) -> Language {
        match self {
            Target::JavaDto
            | Target::JavaRecord
            | Target::JavaMyBatisXml
            | Target::JavaMyBatisAnnotation => Language::Java,
            Target::CSharpDto | Target::CSharpRecord => Language::CSharp,
            Target::TypeScriptInterface
            | Target::TypeScriptClass
            | Target::TypeScriptType
            | Target::TypeScriptZod => Language::TypeScript,
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Target::JavaDto | Target::CSharpDto => Style::Dto,
            Target::JavaRecord | Target::CSharpRecord => Style::Record,
            Target::JavaMyBatisXml => Style::MyBatisXml,
            Target::JavaMyBatisAnnotation => Style::MyBatisAnnotation,
            Target::TypeScriptInterface => Style::Interface,
            Target::TypeScriptClass => Style::Class,
            Target::TypeScriptType => Style::Type,
            Target::TypeScriptZod => Style::Zod,
        }
    }

    /// Look up the target for an already parsed key.
    pub fn from_parts(language: Language, style: Style) -> Option<Target> {
        Self::ALL
            .into_iter()
            .find(|t| t.language() == language && t.style() == style)
    }

    /// Resolve a raw (language, style) key, accepting the usual aliases.
    ///
    /// Unknown names and unregistered combinations both fail with
    /// [`Error::UnsupportedTarget`] carrying the key as given.
    pub fn resolve(language: &str, style: &str) -> Result<Target> {
        let parsed = language
            .parse::<Language>()
            .ok()
            .zip(style.parse::<Style>().ok());
        parsed
            .and_then(|(l, s)| Self::from_parts(l, s))
            .ok_or_else(|| Error::unsupported_target(language, style))
    }

    /// Decode `options` for this target's style.
    ///
    /// Done once per request, before any column metadata is read.
    pub fn configure(&self, options: &Value) -> Result<Configured> {
        let configured = match self {
            Target::JavaDto => Configured::JavaDto(JavaDtoEmitter.decode(options)?),
            Target::JavaRecord => Configured::JavaRecord(JavaRecordEmitter.decode(options)?),
            Target::JavaMyBatisXml => {
                Configured::JavaMyBatisXml(MyBatisXmlEmitter.decode(options)?)
            }
            Target::JavaMyBatisAnnotation => {
                Configured::JavaMyBatisAnnotation(MyBatisAnnotationEmitter.decode(options)?)
            }
            Target::CSharpDto => Configured::CSharpDto(CSharpDtoEmitter.decode(options)?),
            Target::CSharpRecord => Configured::CSharpRecord(CSharpRecordEmitter.decode(options)?),
            Target::TypeScriptInterface => Self::typescript(DeclKind::Interface, options)?,
            Target::TypeScriptClass => Self::typescript(DeclKind::Class, options)?,
            Target::TypeScriptType => Self::typescript(DeclKind::Type, options)?,
            Target::TypeScriptZod => Configured::TypeScriptZod(ZodEmitter.decode(options)?),
        };
        Ok(configured)
    }

    fn typescript(kind: DeclKind, options: &Value) -> Result<Configured> {
        let options = TypeScriptEmitter::new(kind).decode(options)?;
        Ok(Configured::TypeScript(kind, options))
    }

    /// Decode `options`, then run this target's emitter over one table.
    pub fn generate<I>(&self, columns: I, ctx: &EmitContext, options: &Value) -> Result<String>
    where
        I: IntoIterator<Item = ColumnResult>,
    {
        self.configure(options)?.generate(columns, ctx)
    }
}

/// A target together with its decoded options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Configured {
    JavaDto(JavaDtoOptions),
    JavaRecord(JavaRecordOptions),
    JavaMyBatisXml(MyBatisOptions),
    JavaMyBatisAnnotation(MyBatisOptions),
    CSharpDto(CSharpDtoOptions),
    CSharpRecord(CSharpRecordOptions),
    TypeScript(DeclKind, TypeScriptOptions),
    TypeScriptZod(ZodOptions),
}

impl Configured {
    /// Run the emitter over one table's column stream.
    pub fn generate<I>(&self, columns: I, ctx: &EmitContext) -> Result<String>
    where
        I: IntoIterator<Item = ColumnResult>,
    {
        let columns = ordered(columns);
        match self {
            Configured::JavaDto(o) => JavaDtoEmitter.emit(columns, ctx, o),
            Configured::JavaRecord(o) => JavaRecordEmitter.emit(columns, ctx, o),
            Configured::JavaMyBatisXml(o) => MyBatisXmlEmitter.emit(columns, ctx, o),
            Configured::JavaMyBatisAnnotation(o) => MyBatisAnnotationEmitter.emit(columns, ctx, o),
            Configured::CSharpDto(o) => CSharpDtoEmitter.emit(columns, ctx, o),
            Configured::CSharpRecord(o) => CSharpRecordEmitter.emit(columns, ctx, o),
            Configured::TypeScript(kind, o) => TypeScriptEmitter::new(*kind).emit(columns, ctx, o),
            Configured::TypeScriptZod(o) => ZodEmitter.emit(columns, ctx, o),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.language(), self.style())
    }
}
