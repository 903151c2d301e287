//! Recipe catalog: the store the shopping list resolves recipes against.
//!
//! The catalog is a TOML document (`shoplist.toml` by default) with two
//! tables:
//!
//! ```toml
//! [[ingredients]]
//! title = "Flour"
//! unit = "g"
//!
//! [[recipes]]
//! id = 1
//! name = "Pancakes"
//!
//! [[recipes.items]]
//! ingredient = "Flour"
//! quantity = 200
//! ```
//!
//! Ingredients own their unit; recipe items reference ingredients by title
//! and carry the quantity, mirroring an (ingredient, recipe) → quantity join
//! table. The item order inside a recipe is the recipe's authoritative
//! ingredient order.
//!
//! The aggregation layer consumes the catalog only through the
//! [`RecipeStore`] trait, so tests and embedders can substitute their own
//! store.

pub mod io;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{RecipeId, ShoplistError};

/// Unit assigned to ingredients created without an explicit unit ("pieces").
pub const DEFAULT_UNIT: &str = "p.";

/// An ingredient known to the catalog: a title and the unit its quantities
/// are measured in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient title, compared byte-for-byte (no case folding)
    pub title: String,
    /// Measurement unit, e.g. "g", "ml", "p."
    pub unit: String,
}

/// One ingredient line of a recipe: a reference to an ingredient by title
/// plus the quantity this recipe uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeItem {
    /// Title of the referenced ingredient
    pub ingredient: String,
    /// Quantity in the ingredient's unit
    pub quantity: u32,
}

/// A recipe: id, display name, and its ordered ingredient items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe id
    pub id: RecipeId,
    /// Recipe name, shown in the aggregated table's contribution column
    pub name: String,
    /// Ingredient lines in the recipe's own order
    #[serde(default)]
    pub items: Vec<RecipeItem>,
}

/// One resolved ingredient line of a recipe: title, quantity, and the unit
/// from the ingredient table. Owned by the store; read-only to aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    /// Ingredient title
    pub title: String,
    /// Quantity in `unit`
    pub quantity: u32,
    /// Measurement unit
    pub unit: String,
}

/// Read access to recipes and their ingredient lines, the seam between the
/// session list / aggregator and the backing store.
///
/// Contract for [`fetch_by_ids`](Self::fetch_by_ids):
/// - recipes are returned in the order their ids appear in `ids`
/// - ids with no matching recipe are silently dropped
/// - an empty `ids` slice yields an empty result and is never interpreted
///   as "no filter"
pub trait RecipeStore {
    /// Batch-fetch recipes for the given ids.
    fn fetch_by_ids(&self, ids: &[RecipeId]) -> Vec<Recipe>;

    /// Resolve a recipe's items into ingredient lines, in the recipe's own
    /// item order. No resorting.
    fn ingredient_lines(&self, recipe: &Recipe) -> Vec<IngredientLine>;
}

/// The recipe catalog: all known ingredients and recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Ingredient table (title + unit)
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Recipe table
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a recipe by id.
    #[must_use]
    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Look up a recipe by exact name.
    #[must_use]
    pub fn recipe_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Look up an ingredient by exact title.
    #[must_use]
    pub fn ingredient(&self, title: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.title == title)
    }

    /// Search ingredients whose title contains `query`, case-insensitively.
    ///
    /// Used by autocomplete-style lookups; an empty query matches everything.
    #[must_use]
    pub fn search_ingredients(&self, query: &str) -> Vec<&Ingredient> {
        let needle = query.to_lowercase();
        self.ingredients
            .iter()
            .filter(|i| i.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Return the ingredient with `title`, creating it with [`DEFAULT_UNIT`]
    /// if it doesn't exist yet. Matching is exact.
    pub fn get_or_create_ingredient(&mut self, title: &str) -> &Ingredient {
        if let Some(pos) = self.ingredients.iter().position(|i| i.title == title) {
            return &self.ingredients[pos];
        }

        debug!(title, unit = DEFAULT_UNIT, "creating ingredient");
        let pos = self.ingredients.len();
        self.ingredients.push(Ingredient {
            title: title.to_string(),
            unit: DEFAULT_UNIT.to_string(),
        });
        &self.ingredients[pos]
    }

    /// Set the quantity of `title` on the recipe with `recipe_id`,
    /// creating the ingredient (with the default unit) and the item as
    /// needed. Re-invocation updates the existing item in place; it never
    /// duplicates the (ingredient, recipe) record.
    ///
    /// # Errors
    ///
    /// [`ShoplistError::RecipeNotFound`] if `recipe_id` is unknown.
    pub fn upsert_item(
        &mut self,
        recipe_id: RecipeId,
        title: &str,
        quantity: u32,
    ) -> Result<(), ShoplistError> {
        self.get_or_create_ingredient(title);

        let recipe = self
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe_id)
            .ok_or_else(|| ShoplistError::RecipeNotFound {
                name: recipe_id.to_string(),
            })?;

        if let Some(item) = recipe.items.iter_mut().find(|i| i.ingredient == title) {
            item.quantity = quantity;
        } else {
            recipe.items.push(RecipeItem {
                ingredient: title.to_string(),
                quantity,
            });
        }
        Ok(())
    }
}

impl RecipeStore for Catalog {
    /// Resolve ids in slice order, dropping unknown ids.
    ///
    /// Stable ordering keeps the aggregated table reproducible: output row
    /// order follows session insertion order.
    fn fetch_by_ids(&self, ids: &[RecipeId]) -> Vec<Recipe> {
        if ids.is_empty() {
            return Vec::new();
        }
        ids.iter().filter_map(|id| self.recipe(*id).cloned()).collect()
    }

    /// Units come from the ingredient table. An item referencing a title
    /// missing from the table degrades to [`DEFAULT_UNIT`] rather than
    /// failing, since catalog files are hand-editable.
    fn ingredient_lines(&self, recipe: &Recipe) -> Vec<IngredientLine> {
        recipe
            .items
            .iter()
            .map(|item| {
                let unit = self
                    .ingredient(&item.ingredient)
                    .map_or(DEFAULT_UNIT, |i| i.unit.as_str());
                IngredientLine {
                    title: item.ingredient.clone(),
                    quantity: item.quantity,
                    unit: unit.to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(recipes: Vec<Recipe>) -> Catalog {
        Catalog {
            ingredients: vec![
                Ingredient {
                    title: "Flour".to_string(),
                    unit: "g".to_string(),
                },
                Ingredient {
                    title: "Sea salt".to_string(),
                    unit: "g".to_string(),
                },
            ],
            recipes,
        }
    }

    fn recipe(id: RecipeId, name: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            items: vec![],
        }
    }

    #[test]
    fn test_fetch_by_ids_preserves_slice_order() {
        let catalog = catalog_with(vec![recipe(1, "A"), recipe(2, "B"), recipe(3, "C")]);

        let fetched = catalog.fetch_by_ids(&[3, 1]);
        let names: Vec<_> = fetched.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn test_fetch_by_ids_drops_unknown_ids() {
        let catalog = catalog_with(vec![recipe(1, "A")]);

        let fetched = catalog.fetch_by_ids(&[99, 1, 42]);
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].name, "A");
    }

    #[test]
    fn test_fetch_by_ids_empty_input_is_empty_output() {
        let catalog = catalog_with(vec![recipe(1, "A")]);
        assert!(catalog.fetch_by_ids(&[]).is_empty());
    }

    #[test]
    fn test_search_ingredients_case_insensitive() {
        let catalog = catalog_with(vec![]);

        let hits = catalog.search_ingredients("SALT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Sea salt");

        // Empty query matches everything
        assert_eq!(catalog.search_ingredients("").len(), 2);
    }

    #[test]
    fn test_get_or_create_ingredient_defaults_unit() {
        let mut catalog = catalog_with(vec![]);

        let created = catalog.get_or_create_ingredient("Eggs");
        assert_eq!(created.unit, DEFAULT_UNIT);

        // Existing ingredient keeps its unit
        let existing = catalog.get_or_create_ingredient("Flour");
        assert_eq!(existing.unit, "g");
        assert_eq!(catalog.ingredients.len(), 3);
    }

    #[test]
    fn test_upsert_item_updates_in_place() {
        let mut catalog = catalog_with(vec![recipe(1, "A")]);

        catalog.upsert_item(1, "Sugar", 50).unwrap();
        catalog.upsert_item(1, "Sugar", 75).unwrap();

        let items = &catalog.recipe(1).unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 75);
    }

    #[test]
    fn test_ingredient_lines_follow_item_order() {
        let mut catalog = catalog_with(vec![]);
        catalog.ingredients.push(Ingredient {
            title: "Sugar".to_string(),
            unit: "g".to_string(),
        });
        catalog.recipes.push(Recipe {
            id: 1,
            name: "Cake".to_string(),
            items: vec![
                RecipeItem {
                    ingredient: "Sugar".to_string(),
                    quantity: 50,
                },
                RecipeItem {
                    ingredient: "Flour".to_string(),
                    quantity: 200,
                },
            ],
        });

        let lines = catalog.ingredient_lines(catalog.recipe(1).unwrap());
        assert_eq!(
            lines,
            vec![
                IngredientLine {
                    title: "Sugar".to_string(),
                    quantity: 50,
                    unit: "g".to_string(),
                },
                IngredientLine {
                    title: "Flour".to_string(),
                    quantity: 200,
                    unit: "g".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_ingredient_lines_dangling_title_gets_default_unit() {
        let catalog = catalog_with(vec![Recipe {
            id: 1,
            name: "A".to_string(),
            items: vec![RecipeItem {
                ingredient: "Mystery".to_string(),
                quantity: 3,
            }],
        }]);

        let lines = catalog.ingredient_lines(catalog.recipe(1).unwrap());
        assert_eq!(lines[0].unit, DEFAULT_UNIT);
    }

    #[test]
    fn test_upsert_item_unknown_recipe() {
        let mut catalog = catalog_with(vec![]);
        let err = catalog.upsert_item(7, "Sugar", 50).unwrap_err();
        assert!(matches!(err, ShoplistError::RecipeNotFound { .. }));
    }
}
