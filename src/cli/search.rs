//! Search catalog ingredients by title.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::catalog::Catalog;

/// Command to find ingredients whose title contains the query,
/// case-insensitively. Useful for checking spelling before
/// `shoplist ingredients`.
#[derive(Args)]
pub struct SearchCommand {
    /// Substring to match against ingredient titles
    query: String,
}

impl SearchCommand {
    pub async fn execute(self, catalog_path: &Path) -> Result<()> {
        let catalog = Catalog::load(catalog_path)?;
        let hits = catalog.search_ingredients(&self.query);

        if hits.is_empty() {
            println!("No ingredients match '{}'", self.query);
            return Ok(());
        }

        for ingredient in hits {
            println!("{} ({})", ingredient.title, ingredient.unit);
        }
        Ok(())
    }
}
