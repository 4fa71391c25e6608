use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tracing::info;
use typegen::generate;
use typegen_request::{GenerationRequest, SchemaFile};

use super::UnwrapOrExit;
use crate::reports::{GenerateReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Request file (JSON, or TOML when the extension is .toml)
    pub request: PathBuf,

    /// Column metadata file (defaults to ./schema.toml)
    #[arg(short, long, default_value = "schema.toml")]
    pub schema: PathBuf,

    /// Write the generated source to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let request = GenerationRequest::from_file(&self.request).unwrap_or_exit();
        let schema = SchemaFile::open(&self.schema).unwrap_or_exit();

        let generated = generate(&request, &schema).unwrap_or_exit();
        let text = generated.text();

        match &self.output {
            Some(path) => {
                std::fs::write(path, &text)
                    .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
                info!(path = %path.display(), "wrote generated source");

                let report = GenerateReport::new(path, &generated);
                report.render(&mut TerminalOutput::new());
            }
            None => print!("{}", text),
        }

        Ok(())
    }
}
