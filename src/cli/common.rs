//! Helpers shared by the CLI subcommands.

use anyhow::Result;
use std::path::Path;

use crate::catalog::{Catalog, Recipe};
use crate::core::ShoplistError;
use crate::session::{ShoppingList, file::FileSession};

/// Resolve a user-supplied recipe spec against the catalog.
///
/// A spec that parses as an integer is treated as a recipe id; anything
/// else is matched against recipe names exactly.
pub fn resolve_recipe<'a>(catalog: &'a Catalog, spec: &str) -> Result<&'a Recipe> {
    let recipe = match spec.parse::<u64>() {
        Ok(id) => catalog.recipe(id),
        Err(_) => catalog.recipe_by_name(spec),
    };

    recipe.ok_or_else(|| {
        ShoplistError::RecipeNotFound {
            name: spec.to_string(),
        }
        .into()
    })
}

/// Open the session file and bind the shopping list to it.
pub fn open_list(session_path: &Path) -> Result<ShoppingList<FileSession>> {
    let session = FileSession::open(session_path)?;
    Ok(ShoppingList::new(session))
}
