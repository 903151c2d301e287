//! Ingredient aggregation: reduce selected recipes into one shopping table.
//!
//! This module owns the two operations that share the "group and assign/sum
//! per ingredient" shape:
//!
//! - [`upsert_ingredients`] populates one recipe's ingredient lines from a
//!   structured entry list (the flat form-field decoding boundary lives in
//!   [`form`]);
//! - [`shopping_table`] folds every ingredient line of the selected recipes
//!   into [`AggregatedRow`]s grouped by exact `(title, unit)`.
//!
//! The aggregator holds no state of its own; it is a pure transformation
//! invoked per call, reading line data through the [`RecipeStore`] seam.
//! Quantities are integers end to end, so sums stay integers.

pub mod form;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, RecipeStore};
use crate::core::{RecipeId, ShoplistError};

/// One row of the aggregated shopping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedRow {
    /// Ingredient title
    pub title: String,
    /// Sum of all matching line quantities
    pub quantity: u32,
    /// Measurement unit (part of the grouping key)
    pub unit: String,
    /// Names of contributing recipes, in processing order.
    ///
    /// One entry per matching line: a recipe that supplies the same
    /// ingredient twice appears twice.
    pub recipes: Vec<String>,
}

/// A structured (title, quantity) pair for populating a recipe's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientEntry {
    /// Ingredient title
    pub title: String,
    /// Quantity to assign
    pub quantity: u32,
}

/// Create or update a recipe's ingredient lines from structured entries.
///
/// For each entry the ingredient is resolved or created by exact title
/// (newly created ingredients get the default unit), then the
/// (ingredient, recipe) quantity record is upserted. Re-invocation with
/// overlapping titles updates records in place; it never duplicates them.
///
/// # Errors
///
/// [`ShoplistError::RecipeNotFound`] if `recipe_id` is unknown.
pub fn upsert_ingredients(
    catalog: &mut Catalog,
    recipe_id: RecipeId,
    entries: &[IngredientEntry],
) -> Result<(), ShoplistError> {
    for entry in entries {
        catalog.upsert_item(recipe_id, &entry.title, entry.quantity)?;
    }
    debug!(recipe_id, entries = entries.len(), "upserted ingredient entries");
    Ok(())
}

/// Fold the ingredient lines of the recipes selected by `ids` into one
/// consolidated table.
///
/// Lines group by exact `(title, unit)` - byte equality, no normalization.
/// Quantities sum, saturating at `u32::MAX`; each matching line appends its
/// recipe's name to the
/// row's contribution list. Rows appear in first-seen order across the
/// store's resolution order (id order, for [`Catalog`]). An empty selection
/// returns an empty table without issuing a fetch; recipes without lines
/// contribute nothing.
#[must_use]
pub fn shopping_table<R: RecipeStore>(store: &R, ids: &[RecipeId]) -> Vec<AggregatedRow> {
    if ids.is_empty() {
        return Vec::new();
    }

    let recipes = store.fetch_by_ids(ids);

    let mut rows: Vec<AggregatedRow> = Vec::new();
    // (title, unit) -> index into rows, to keep first-seen ordering
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for recipe in &recipes {
        for line in store.ingredient_lines(recipe) {
            let key = (line.title, line.unit);
            match index.get(&key) {
                Some(&i) => {
                    // Saturate rather than panic on absurd hand-edited quantities
                    rows[i].quantity = rows[i].quantity.saturating_add(line.quantity);
                    rows[i].recipes.push(recipe.name.clone());
                }
                None => {
                    index.insert(key.clone(), rows.len());
                    rows.push(AggregatedRow {
                        title: key.0,
                        quantity: line.quantity,
                        unit: key.1,
                        recipes: vec![recipe.name.clone()],
                    });
                }
            }
        }
    }

    debug!(recipes = recipes.len(), rows = rows.len(), "aggregated shopping table");
    rows
}
