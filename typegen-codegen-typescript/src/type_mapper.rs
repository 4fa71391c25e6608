//! TypeScript and Zod type mapper implementations.

use typegen_core::{Engine, TypeMapper};

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn unknown(&self) -> &'static str {
        "any"
    }

    fn map_scalar(&self, engine: Engine, raw: &str) -> Option<&'static str> {
        match engine {
            Engine::MySql => mysql_to_ts(raw),
            Engine::Postgres => postgres_to_ts(raw),
            Engine::SqlServer => mssql_to_ts(raw),
        }
    }

    fn array_of(&self, element: &str) -> String {
        // `string | Date[]` would bind the array to `Date` only
        if element.contains('|') {
            format!("({})[]", element)
        } else {
            format!("{}[]", element)
        }
    }
}

fn mysql_to_ts(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" | "long" => "number",
        "decimal" | "numeric" | "float" | "double" | "double precision" | "real" | "year" => {
            "number"
        }
        "bit" | "bool" | "boolean" => "boolean",
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "enum" | "set" => {
            "string"
        }
        "date" | "datetime" | "timestamp" => "string | Date",
        "time" => "string",
        "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => "Uint8Array",
        "json" => "Record<string, any>",
        _ => return None,
    };
    Some(ty)
}

fn postgres_to_ts(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "int2" | "int4" | "int8" | "smallint" | "integer" | "int" | "bigint" | "serial"
        | "smallserial" | "bigserial" | "oid" => "number",
        "float4" | "float8" | "real" | "double precision" | "numeric" | "decimal" | "money" => {
            "number"
        }
        "bool" | "boolean" => "boolean",
        "text" | "varchar" | "character varying" | "bpchar" | "char" | "character" | "name"
        | "citext" | "uuid" | "inet" | "cidr" | "macaddr" | "xml" | "interval" => "string",
        "date" | "timestamp" | "timestamp without time zone" | "timestamptz"
        | "timestamp with time zone" | "time" | "time without time zone" | "timetz"
        | "time with time zone" => "string | Date",
        "json" | "jsonb" => "Record<string, any>",
        "bytea" => "Uint8Array",
        "int4range" | "int8range" | "numrange" | "tsrange" | "tstzrange" | "daterange" => {
            "string"
        }
        _ => return None,
    };
    Some(ty)
}

fn mssql_to_ts(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "int" | "bigint" | "smallint" | "tinyint" | "decimal" | "numeric" | "float" | "real"
        | "money" | "smallmoney" => "number",
        "varchar" | "nvarchar" | "char" | "nchar" | "text" | "ntext" | "uniqueidentifier"
        | "xml" => "string",
        "datetime" | "datetime2" | "smalldatetime" | "date" | "time" | "datetimeoffset" => {
            "string | Date"
        }
        "bit" => "boolean",
        "binary" | "varbinary" | "image" | "rowversion" | "timestamp" => "Uint8Array",
        "sql_variant" | "hierarchyid" | "geometry" | "geography" => "any",
        _ => return None,
    };
    Some(ty)
}

/// Zod schema mapper. Types are the call following `z.` (e.g. `string()`).
pub struct ZodTypeMapper;

impl ZodTypeMapper {
    /// Base type that string refinements (`trim`, `max`) apply to.
    pub const STRING: &'static str = "string()";
}

impl TypeMapper for ZodTypeMapper {
    fn unknown(&self) -> &'static str {
        "any()"
    }

    fn map_scalar(&self, engine: Engine, raw: &str) -> Option<&'static str> {
        match engine {
            Engine::MySql => mysql_to_zod(raw),
            Engine::Postgres => postgres_to_zod(raw),
            Engine::SqlServer => mssql_to_zod(raw),
        }
    }

    fn array_of(&self, element: &str) -> String {
        format!("array(z.{})", element)
    }
}

fn mysql_to_zod(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" | "long"
        | "decimal" | "numeric" | "float" | "double" | "double precision" | "real" | "year" => {
            "number()"
        }
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" | "enum" | "set"
        | "time" => "string()",
        "date" | "datetime" | "timestamp" => "date()",
        "bit" | "bool" | "boolean" => "boolean()",
        "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => {
            "instanceof(Uint8Array)"
        }
        "json" => "record(z.string(), z.any())",
        _ => return None,
    };
    Some(ty)
}

fn postgres_to_zod(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "smallint" | "int2" | "integer" | "int" | "int4" | "serial" | "smallserial" | "bigint"
        | "int8" | "bigserial" | "decimal" | "numeric" | "money" | "real" | "float4"
        | "double precision" | "float8" | "oid" => "number()",
        "varchar" | "character varying" | "char" | "character" | "bpchar" | "text" | "citext"
        | "name" | "inet" | "cidr" | "macaddr" | "xml" | "interval" => "string()",
        "boolean" | "bool" => "boolean()",
        "date" | "timestamp" | "timestamp without time zone" | "timestamptz"
        | "timestamp with time zone" => "date()",
        "time" | "time without time zone" | "timetz" | "time with time zone" => "string()",
        "uuid" => "string().uuid()",
        "json" | "jsonb" => "any()",
        "bytea" => "instanceof(Uint8Array)",
        _ => return None,
    };
    Some(ty)
}

fn mssql_to_zod(raw: &str) -> Option<&'static str> {
    let ty = match raw {
        "int" | "bigint" | "smallint" | "tinyint" | "decimal" | "numeric" | "float" | "real"
        | "money" | "smallmoney" => "number()",
        "varchar" | "nvarchar" | "char" | "nchar" | "text" | "ntext" | "xml" | "time" => {
            "string()"
        }
        "datetime" | "datetime2" | "smalldatetime" | "date" | "datetimeoffset" => "date()",
        "bit" => "boolean()",
        "uniqueidentifier" => "string().uuid()",
        "binary" | "varbinary" | "image" | "rowversion" | "timestamp" => "instanceof(Uint8Array)",
        _ => return None,
    };
    Some(ty)
}
