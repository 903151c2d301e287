//! Export the aggregated shopping table.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::aggregate::AggregatedRow;
use crate::catalog::Catalog;
use crate::utils::fs::atomic_write;

use super::common::open_list;

/// Output format for the export command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Plain-text table
    Table,
    /// Markdown table (render to HTML/PDF with external tooling)
    Markdown,
    /// Machine-readable JSON
    Json,
}

/// Command to materialize the shopping list into a document-ready table.
#[derive(Args)]
pub struct ExportCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Table)]
    format: ExportFormat,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

impl ExportCommand {
    pub async fn execute(self, catalog_path: &Path, session_path: &Path) -> Result<()> {
        let catalog = Catalog::load(catalog_path)?;
        let list = open_list(session_path)?;
        let rows = list.aggregate(&catalog);

        let rendered = match self.format {
            ExportFormat::Json => serde_json::to_string_pretty(&rows)? + "\n",
            ExportFormat::Table => render_table(&rows),
            ExportFormat::Markdown => render_markdown(&rows),
        };

        match self.output {
            Some(path) => {
                atomic_write(&path, rendered.as_bytes())?;
                println!(
                    "{} Wrote shopping list ({} rows) to {}",
                    "✓".green(),
                    rows.len(),
                    path.display()
                );
            }
            None => print!("{rendered}"),
        }
        Ok(())
    }
}

fn render_table(rows: &[AggregatedRow]) -> String {
    if rows.is_empty() {
        return "The shopping list is empty\n".to_string();
    }

    let title_width = rows.iter().map(|r| r.title.len()).max().unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{:title_width$}  {} {}  ({})",
            row.title,
            row.quantity,
            row.unit,
            row.recipes.join(", ")
        );
    }
    out
}

fn render_markdown(rows: &[AggregatedRow]) -> String {
    let mut out = String::from("| Ingredient | Quantity | Unit | Recipes |\n|---|---|---|---|\n");
    for row in rows {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            row.title,
            row.quantity,
            row.unit,
            row.recipes.join(", ")
        );
    }
    out
}
