//! Request orchestration.

use tracing::{debug, info_span, warn};
use typegen_codegen::{EmitContext, Error, Result};
use typegen_request::{ColumnProvider, GenerationRequest};

use crate::Target;

/// Source emitted for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub table: String,
    pub type_name: String,
    pub source: String,
}

/// Output of a whole request, one unit per table in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub target: Target,
    pub units: Vec<GeneratedUnit>,
}

impl Generated {
    /// All units, separated by one blank line.
    pub fn text(&self) -> String {
        self.units
            .iter()
            .map(|u| u.source.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Generate every table of `request` from `provider`.
///
/// The target is resolved and its options decoded before any table is opened. The first failing
/// table aborts the request; nothing generated so far is returned.
pub fn generate<P>(request: &GenerationRequest, provider: &P) -> Result<Generated>
where
    P: ColumnProvider,
{
    let target = Target::resolve(&request.language, &request.style)?;
    let configured = target.configure(&request.options)?;
    let engine = provider.engine();
    let _span = info_span!("generate", %target, %engine).entered();

    if request.table_names.is_empty() {
        warn!("request lists no tables");
    }

    let mut units = Vec::with_capacity(request.table_names.len());
    for table in &request.table_names {
        let ctx = EmitContext::with_affixes(table, engine, &request.prefix, &request.suffix);
        let columns = provider
            .open_columns(engine, table)
            .map_err(|e| Error::stream(table, e))?;
        let source = configured.generate(columns, &ctx)?;
        debug!(table = %table, type_name = %ctx.type_name, bytes = source.len(), "emitted unit");

        units.push(GeneratedUnit {
            table: ctx.table,
            type_name: ctx.type_name,
            source,
        });
    }

    Ok(Generated { target, units })
}
