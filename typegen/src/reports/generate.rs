//! Generate command report data structures.

use std::path::{Path, PathBuf};

use typegen::{Generated, Target};

use super::output::{Output, Report};

/// Summary of source written to a file.
#[derive(Debug)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub target: Target,
    /// `(table, type name)` per unit, in request order.
    pub units: Vec<(String, String)>,
}

impl GenerateReport {
    pub fn new(output: &Path, generated: &Generated) -> Self {
        Self {
            output: output.to_path_buf(),
            target: generated.target,
            units: generated
                .units
                .iter()
                .map(|u| (u.table.clone(), u.type_name.clone()))
                .collect(),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Target", &self.target.to_string());
        out.key_value("Output", &self.output.display().to_string());
        if self.units.is_empty() {
            out.section("No tables requested");
            return;
        }
        out.section(&format!("Generated ({})", self.units.len()));
        for (table, type_name) in &self.units {
            out.added_item(&format!("{} <- {}", type_name, table));
        }
    }
}
