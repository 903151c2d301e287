//! Add a recipe to the shopping list.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use crate::catalog::Catalog;

use super::common::{open_list, resolve_recipe};

/// Command to add a catalog recipe to the shopping list.
///
/// The recipe must exist in the catalog; adding one that is already
/// selected is a no-op.
#[derive(Args)]
pub struct AddCommand {
    /// Recipe id or exact recipe name
    recipe: String,
}

impl AddCommand {
    pub async fn execute(self, catalog_path: &Path, session_path: &Path) -> Result<()> {
        let catalog = Catalog::load(catalog_path)?;
        let recipe = resolve_recipe(&catalog, &self.recipe)?;

        let mut list = open_list(session_path)?;
        if list.contains(recipe.id) {
            println!("'{}' is already on the shopping list", recipe.name);
            return Ok(());
        }

        list.add(recipe.id)?;

        println!(
            "{} Added '{}' to the shopping list ({} selected)",
            "✓".green(),
            recipe.name,
            list.len()
        );
        Ok(())
    }
}
