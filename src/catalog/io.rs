//! I/O operations for catalog loading and saving.
//!
//! Loading maps parse failures into typed [`ShoplistError`] variants and
//! wraps them with actionable context; saving goes through an atomic write
//! so a crash never truncates the catalog.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::ShoplistError;
use crate::utils::fs::atomic_write;

use super::Catalog;

/// Default catalog file name, looked up in the current directory.
pub const DEFAULT_CATALOG_FILE: &str = "shoplist.toml";

impl Catalog {
    /// Load a catalog from disk.
    ///
    /// # Errors
    ///
    /// - [`ShoplistError::CatalogNotFound`] if the file doesn't exist
    ///   (run `shoplist init` first)
    /// - [`ShoplistError::CatalogParseError`] for invalid TOML, wrapped with
    ///   a hint about regenerating or fixing the file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShoplistError::CatalogNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(path).with_context(|| {
            format!(
                "Cannot read catalog file: {}\n\n\
                    Possible causes:\n\
                    - Permission denied (check file ownership)\n\
                    - File is locked by another process",
                path.display()
            )
        })?;

        // An empty file is a valid, empty catalog
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let catalog: Self = toml::from_str(&content)
            .map_err(|e| ShoplistError::CatalogParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
            .with_context(|| {
                format!(
                    "Invalid TOML syntax in catalog: {}\n\n\
                    You can:\n\
                    - Check for syntax errors if you edited the file by hand\n\
                    - Run 'shoplist init --force' to start from a fresh template",
                    path.display()
                )
            })?;

        debug!(
            recipes = catalog.recipes.len(),
            ingredients = catalog.ingredients.len(),
            "loaded catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Save the catalog to disk atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize catalog to TOML")?;

        atomic_write(path, content.as_bytes())
            .with_context(|| format!("Failed to write catalog file: {}", path.display()))?;

        debug!("saved catalog to {}", path.display());
        Ok(())
    }
}
