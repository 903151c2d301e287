//! shoplist - recipe catalog and shopping-list aggregation.
//!
//! A household picks recipes out of a catalog into a per-user shopping
//! list; shoplist reduces the selected recipes' ingredient lines into one
//! consolidated quantity-per-ingredient table ready to print or render
//! into a document.
//!
//! # Architecture
//!
//! - [`catalog`] - the recipe store: a TOML file of ingredients (title +
//!   unit) and recipes (ordered ingredient items), consumed through the
//!   [`catalog::RecipeStore`] trait
//! - [`session`] - the shopping list: an ordered, duplicate-free sequence
//!   of recipe ids kept under one slot of an injected [`session::SessionStore`]
//!   (in-memory for embedding, a TOML file for the CLI)
//! - [`aggregate`] - the aggregation engine: fold the selected recipes'
//!   lines into rows grouped by exact `(title, unit)`, quantities summed,
//!   contributing recipe names tracked in processing order; plus the
//!   form-field boundary decoder for legacy flat ingredient fields
//! - [`cli`] - clap subcommands over the above
//! - [`core`] - shared id type and error machinery
//!
//! # Example
//!
//! ```rust
//! use shoplist_cli::catalog::{Catalog, Ingredient, Recipe, RecipeItem};
//! use shoplist_cli::session::{MemorySession, ShoppingList};
//!
//! let catalog = Catalog {
//!     ingredients: vec![Ingredient { title: "Salt".into(), unit: "g".into() }],
//!     recipes: vec![
//!         Recipe { id: 1, name: "Soup".into(), items: vec![
//!             RecipeItem { ingredient: "Salt".into(), quantity: 5 },
//!         ]},
//!         Recipe { id: 2, name: "Bread".into(), items: vec![
//!             RecipeItem { ingredient: "Salt".into(), quantity: 3 },
//!         ]},
//!     ],
//! };
//!
//! let mut list = ShoppingList::new(MemorySession::new());
//! list.add(1)?;
//! list.add(2)?;
//!
//! let rows = list.aggregate(&catalog);
//! assert_eq!(rows[0].quantity, 8);
//! assert_eq!(rows[0].recipes, vec!["Soup", "Bread"]);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregate;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod session;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
