//! Test helpers, available to integration tests through the `test-utils`
//! feature (the crate depends on itself with that feature in
//! dev-dependencies).

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::catalog::{Catalog, Ingredient, Recipe, RecipeItem};

static INIT_LOGGING: Once = Once::new();

/// Initialize tracing for tests, once per process.
///
/// Pass a level to force it, or set `RUST_LOG`; with neither, logging stays
/// off.
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// A small two-recipe catalog matching the end-to-end aggregation scenario:
/// recipe A (Flour 200 g, Sugar 50 g) and recipe B (Sugar 30 g, Eggs 2 pc).
#[must_use]
pub fn sample_catalog() -> Catalog {
    let ingredient = |title: &str, unit: &str| Ingredient {
        title: title.to_string(),
        unit: unit.to_string(),
    };
    let item = |title: &str, quantity: u32| RecipeItem {
        ingredient: title.to_string(),
        quantity,
    };

    Catalog {
        ingredients: vec![
            ingredient("Flour", "g"),
            ingredient("Sugar", "g"),
            ingredient("Eggs", "pc"),
        ],
        recipes: vec![
            Recipe {
                id: 1,
                name: "A".to_string(),
                items: vec![item("Flour", 200), item("Sugar", 50)],
            },
            Recipe {
                id: 2,
                name: "B".to_string(),
                items: vec![item("Sugar", 30), item("Eggs", 2)],
            },
        ],
    }
}

/// Write [`sample_catalog`] into `dir` and return the file path.
pub fn write_sample_catalog(dir: &std::path::Path) -> anyhow::Result<std::path::PathBuf> {
    let path = dir.join("shoplist.toml");
    sample_catalog().save(&path)?;
    Ok(path)
}

/// Create a temp directory seeded with [`sample_catalog`].
///
/// Keep the returned [`tempfile::TempDir`] alive for the duration of the
/// test; the directory is deleted when it drops.
pub fn temp_catalog() -> anyhow::Result<(tempfile::TempDir, std::path::PathBuf)> {
    let dir = tempfile::TempDir::new()?;
    let path = write_sample_catalog(dir.path())?;
    Ok((dir, path))
}
