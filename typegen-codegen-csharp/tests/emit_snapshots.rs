//! Snapshot tests for C# emission.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use serde_json::json;
use typegen_codegen::testing::{failing_stream, mssql_accounts, postgres_orders, stream};
use typegen_codegen::{EmitContext, Emitter, Error};
use typegen_codegen_csharp::{CSharpDtoEmitter, CSharpRecordEmitter};
use typegen_core::Engine;

#[test]
fn test_postgres_dto_with_properties() {
    let ctx = EmitContext::with_affixes("orders", Engine::Postgres, "", "Dto");
    let out = CSharpDtoEmitter
        .generate(
            stream(postgres_orders()),
            &ctx,
            &json!({"getter": true, "setter": true, "nullable": true}),
        )
        .expect("generation failed");

    insta::assert_snapshot!(out, @r"
public class OrdersDto
{
    public long OrderId { get; set; }
    public int LineNo { get; set; }
    public string Sku { get; set; }
    public string[]? Tags { get; set; }
    public string? Payload { get; set; }
    public DateTimeOffset PlacedAt { get; set; }
    public string InsertUserId { get; set; }
    public DateTime? UpdateDtm { get; set; }
}
");
}

#[test]
fn test_mssql_init_record_with_json_names() {
    let ctx = EmitContext::new("accounts", Engine::SqlServer);
    let out = CSharpRecordEmitter
        .generate(
            stream(mssql_accounts()),
            &ctx,
            &json!({
                "withInit": true,
                "nullable": true,
                "jsonPropertyName": true,
                "extraSpacing": true
            }),
        )
        .expect("generation failed");

    insta::assert_snapshot!(out, @r#"
using System.Text.Json.Serialization;

public record Accounts
{
    [JsonPropertyName("account_id")]
    public Guid AccountId { get; init; }

    [JsonPropertyName("balance")]
    public decimal? Balance { get; init; }

    [JsonPropertyName("display_name")]
    public string? DisplayName { get; init; }

    [JsonPropertyName("opened_at")]
    public DateTimeOffset OpenedAt { get; init; }
}
"#);
}

#[test]
fn test_positional_record_camel_case() {
    let ctx = EmitContext::new("accounts", Engine::SqlServer);
    let out = CSharpRecordEmitter
        .generate(
            stream(mssql_accounts()),
            &ctx,
            &json!({"positional": true, "camelCaseProperties": true}),
        )
        .expect("generation failed");

    insta::assert_snapshot!(out, @r"
public record Accounts(
    Guid accountId,
    decimal balance,
    string displayName,
    DateTimeOffset openedAt
);
");
}

#[test]
fn test_stream_failure_aborts_record() {
    let ctx = EmitContext::new("accounts", Engine::SqlServer);
    let err = CSharpRecordEmitter
        .generate(
            failing_stream(mssql_accounts(), "timeout"),
            &ctx,
            &json!({"positional": true}),
        )
        .unwrap_err();
    match err {
        Error::Stream { table, .. } => assert_eq!(table, "accounts"),
        other => panic!("unexpected error: {other:?}"),
    }
}
