//! C# type mapper implementation.

use typegen_core::{Engine, TypeMapper};

/// C# type mapper implementation.
pub struct CSharpTypeMapper;

impl TypeMapper for CSharpTypeMapper {
    fn unknown(&self) -> &'static str {
        "object"
    }

    fn map_scalar(&self, engine: Engine, raw: &str) -> Option<&'static str> {
        match engine {
            Engine::MySql => mysql_to_csharp(raw),
            Engine::Postgres => postgres_to_csharp(raw),
            Engine::SqlServer => mssql_to_csharp(raw),
        }
    }
}

fn mysql_to_csharp(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "tinyint" => "byte",
        "smallint" => "short",
        "mediumint" | "int" | "integer" | "year" => "int",
        "bigint" => "long",
        "decimal" | "numeric" => "decimal",
        "float" => "float",
        "double" | "double precision" | "real" => "double",
        "bit" | "bool" | "boolean" => "bool",
        "date" | "datetime" | "timestamp" => "DateTime",
        "time" => "TimeSpan",
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "enum" | "set"
        | "json" => "string",
        "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => "byte[]",
        _ => return None,
    };
    Some(ty)
}

fn postgres_to_csharp(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "smallint" | "int2" | "smallserial" => "short",
        "integer" | "int" | "int4" | "serial" => "int",
        "bigint" | "int8" | "bigserial" | "oid" => "long",
        "numeric" | "decimal" | "money" => "decimal",
        "real" | "float4" => "float",
        "double precision" | "float8" => "double",
        "boolean" | "bool" => "bool",
        "date" | "timestamp" | "timestamp without time zone" => "DateTime",
        "timestamptz" | "timestamp with time zone" | "timetz" | "time with time zone" => {
            "DateTimeOffset"
        }
        "time" | "time without time zone" | "interval" => "TimeSpan",
        "uuid" => "Guid",
        "text" | "varchar" | "character varying" | "char" | "character" | "bpchar" | "name"
        | "citext" => "string",
        "json" | "jsonb" | "xml" => "string",
        "inet" | "cidr" | "macaddr" => "string",
        "bytea" => "byte[]",
        _ => return None,
    };
    Some(ty)
}

fn mssql_to_csharp(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "bit" => "bool",
        "tinyint" => "byte",
        "smallint" => "short",
        "int" => "int",
        "bigint" => "long",
        "decimal" | "numeric" | "money" | "smallmoney" => "decimal",
        "float" => "double",
        "real" => "float",
        "date" | "datetime" | "datetime2" | "smalldatetime" => "DateTime",
        "time" => "TimeSpan",
        "datetimeoffset" => "DateTimeOffset",
        "char" | "nchar" | "varchar" | "nvarchar" | "text" | "ntext" | "xml" => "string",
        "binary" | "varbinary" | "image" | "rowversion" | "timestamp" => "byte[]",
        "uniqueidentifier" => "Guid",
        _ => return None,
    };
    Some(ty)
}
