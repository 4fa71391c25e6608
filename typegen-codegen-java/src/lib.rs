//! Java emitters for the typegen source generator.
//!
//! - [`JavaDtoEmitter`] - Lombok-annotated DTO classes
//! - [`JavaRecordEmitter`] - positional `record` declarations
//! - [`MyBatisXmlEmitter`] / [`MyBatisAnnotationEmitter`] - CRUD mappers
//!   as a MyBatis XML document or an annotated `@Mapper` interface

mod dto;
mod naming;
mod options;
mod record;
mod type_mapper;

pub mod ast;
pub mod mybatis;

pub use dto::JavaDtoEmitter;
pub use mybatis::{MyBatisAnnotationEmitter, MyBatisXmlEmitter};
pub use naming::field_name;
pub use options::{JavaDtoOptions, JavaRecordOptions, MyBatisOptions};
pub use record::JavaRecordEmitter;
pub use type_mapper::JavaTypeMapper;
