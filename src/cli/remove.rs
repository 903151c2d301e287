//! Remove a recipe from the shopping list.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use crate::catalog::Catalog;

use super::common::{open_list, resolve_recipe};

/// Command to remove a recipe from the shopping list.
///
/// Removing a recipe that isn't selected is a notice, not an error.
#[derive(Args)]
pub struct RemoveCommand {
    /// Recipe id or exact recipe name
    recipe: String,
}

impl RemoveCommand {
    pub async fn execute(self, catalog_path: &Path, session_path: &Path) -> Result<()> {
        // Bare ids are removable even if the catalog no longer knows them,
        // so a stale selection can always be cleaned up.
        let (id, label) = match self.recipe.parse::<u64>() {
            Ok(id) => (id, self.recipe.clone()),
            Err(_) => {
                let catalog = Catalog::load(catalog_path)?;
                let recipe = resolve_recipe(&catalog, &self.recipe)?;
                (recipe.id, recipe.name.clone())
            }
        };

        let mut list = open_list(session_path)?;
        if !list.contains(id) {
            println!("'{label}' is not on the shopping list");
            return Ok(());
        }

        list.remove(id)?;

        println!(
            "{} Removed '{}' from the shopping list ({} selected)",
            "✓".green(),
            label,
            list.len()
        );
        Ok(())
    }
}
