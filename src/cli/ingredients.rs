//! Set a recipe's ingredients from form-style fields.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::Path;

use crate::aggregate::{form::decode_ingredient_fields, upsert_ingredients};
use crate::catalog::Catalog;

use super::common::resolve_recipe;

/// Command to create or update a recipe's ingredient lines.
///
/// Fields use the flat form encoding legacy clients submit:
///
/// ```bash
/// shoplist ingredients Pancakes nameIngredient_1=Flour valueIngredient_1=200
/// ```
///
/// Incomplete name/value groups are skipped, and repeating a title updates
/// the existing quantity instead of duplicating the line.
#[derive(Args)]
pub struct IngredientsCommand {
    /// Recipe id or exact recipe name
    recipe: String,

    /// Form fields as key=value pairs
    #[arg(value_name = "FIELDS", required = true)]
    fields: Vec<String>,
}

impl IngredientsCommand {
    pub async fn execute(self, catalog_path: &Path) -> Result<()> {
        let mut catalog = Catalog::load(catalog_path)?;
        let recipe_id = resolve_recipe(&catalog, &self.recipe)?.id;

        let pairs: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|field| {
                field
                    .split_once('=')
                    .ok_or_else(|| anyhow!("Invalid field '{field}', expected key=value"))
            })
            .collect::<Result<_>>()?;

        let entries = decode_ingredient_fields(pairs);
        if entries.is_empty() {
            println!("No complete ingredient fields found, nothing to update");
            return Ok(());
        }

        upsert_ingredients(&mut catalog, recipe_id, &entries)?;
        catalog.save(catalog_path)?;

        println!(
            "{} Set {} ingredient(s) on '{}'",
            "✓".green(),
            entries.len(),
            self.recipe
        );
        Ok(())
    }
}
