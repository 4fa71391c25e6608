use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typegen::Target;
use typegen_request::{ColumnProvider, SchemaFile};

use super::UnwrapOrExit;
use crate::reports::{ListReport, Report, SchemaSummary, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    /// Also list the tables of this column metadata file
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.as_ref().map(|path| {
            let file = SchemaFile::open(path).unwrap_or_exit();
            SchemaSummary {
                path: path.clone(),
                engine: file.engine(),
                tables: file.table_names().map(str::to_string).collect(),
            }
        });

        let report = ListReport {
            targets: Target::all().to_vec(),
            schema,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
