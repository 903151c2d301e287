//! Show the recipes currently on the shopping list.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::Path;

use crate::catalog::Catalog;

use super::common::open_list;

/// Output format for the list command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable lines
    Table,
    /// Machine-readable JSON
    Json,
}

/// Command to display the resolved shopping-list selection.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Table)]
    format: ListFormat,
}

impl ListCommand {
    pub async fn execute(self, catalog_path: &Path, session_path: &Path) -> Result<()> {
        let catalog = Catalog::load(catalog_path)?;
        let list = open_list(session_path)?;
        let recipes = list.recipes(&catalog);

        match self.format {
            ListFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&recipes)?);
            }
            ListFormat::Table => {
                if recipes.is_empty() {
                    println!("The shopping list is empty. Add recipes with 'shoplist add'");
                    return Ok(());
                }

                println!("{}", "Selected recipes:".cyan());
                for recipe in &recipes {
                    println!(
                        "  {} {} ({} ingredients)",
                        format!("#{}", recipe.id).bright_white(),
                        recipe.name,
                        recipe.items.len()
                    );
                }
            }
        }
        Ok(())
    }
}
