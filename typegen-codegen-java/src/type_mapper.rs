//! Java type mapper implementation.

use typegen_core::{Engine, TypeMapper};

/// Java type mapper implementation.
///
/// Types are boxed (`Integer`, not `int`) so every field can hold `null`.
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn unknown(&self) -> &'static str {
        "Object"
    }

    fn map_scalar(&self, engine: Engine, raw: &str) -> Option<&'static str> {
        match engine {
            Engine::MySql => mysql_to_java(raw),
            Engine::Postgres => postgres_to_java(raw),
            Engine::SqlServer => mssql_to_java(raw),
        }
    }
}

fn mysql_to_java(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "tinyint" => "Byte",
        "smallint" => "Short",
        "mediumint" | "int" | "integer" => "Integer",
        "bigint" => "Long",
        "decimal" | "numeric" => "BigDecimal",
        "float" => "Float",
        "double" | "double precision" | "real" => "Double",
        "bit" | "bool" | "boolean" => "Boolean",
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "enum" | "set"
        | "json" => "String",
        "date" => "LocalDate",
        "datetime" | "timestamp" => "LocalDateTime",
        "time" => "LocalTime",
        "year" => "Year",
        "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => "byte[]",
        _ => return None,
    };
    Some(ty)
}

fn postgres_to_java(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "smallint" | "int2" | "smallserial" => "Short",
        "integer" | "int" | "int4" | "serial" => "Integer",
        "bigint" | "int8" | "bigserial" | "oid" => "Long",
        "decimal" | "numeric" | "money" => "BigDecimal",
        "real" | "float4" => "Float",
        "double precision" | "float8" => "Double",
        "boolean" | "bool" => "Boolean",
        "varchar" | "character varying" | "char" | "character" | "bpchar" | "text" | "citext"
        | "name" => "String",
        "date" => "LocalDate",
        "time" | "time without time zone" => "LocalTime",
        "timetz" | "time with time zone" => "OffsetTime",
        "timestamp" | "timestamp without time zone" => "LocalDateTime",
        "timestamptz" | "timestamp with time zone" => "OffsetDateTime",
        "interval" => "Duration",
        "bytea" => "byte[]",
        "uuid" => "UUID",
        "json" | "jsonb" | "xml" => "String",
        "inet" | "cidr" | "macaddr" => "String",
        _ => return None,
    };
    Some(ty)
}

fn mssql_to_java(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "bit" => "Boolean",
        // unsigned 0..=255 does not fit Byte
        "tinyint" | "smallint" => "Short",
        "int" => "Integer",
        "bigint" => "Long",
        "decimal" | "numeric" | "money" | "smallmoney" => "BigDecimal",
        "real" => "Float",
        "float" => "Double",
        "char" | "varchar" | "nchar" | "nvarchar" | "text" | "ntext" | "xml" => "String",
        "date" => "LocalDate",
        "time" => "LocalTime",
        "datetime" | "datetime2" | "smalldatetime" => "LocalDateTime",
        "datetimeoffset" => "OffsetDateTime",
        "uniqueidentifier" => "UUID",
        "binary" | "varbinary" | "image" | "rowversion" | "timestamp" => "byte[]",
        _ => return None,
    };
    Some(ty)
}
