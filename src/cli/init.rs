//! Initialize a new catalog file.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::catalog::io::DEFAULT_CATALOG_FILE;

/// Command to create a new `shoplist.toml` catalog template.
#[derive(Args)]
pub struct InitCommand {
    /// Directory to create the catalog in (defaults to the current directory)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Overwrite an existing catalog file
    #[arg(long, short = 'f')]
    force: bool,
}

impl InitCommand {
    /// Write the catalog template, refusing to overwrite unless `--force`.
    pub async fn execute(self) -> Result<()> {
        let target_dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let catalog_path = target_dir.join(DEFAULT_CATALOG_FILE);

        if catalog_path.exists() && !self.force {
            return Err(anyhow!(
                "Catalog already exists at {}. Use --force to overwrite",
                catalog_path.display()
            ));
        }

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir)?;
        }

        let template = r#"# shoplist catalog
# Ingredients own their measurement unit; recipe items reference them by
# title and carry the quantity.

[[ingredients]]
title = "Flour"
unit = "g"

[[ingredients]]
title = "Eggs"
unit = "pc"

[[recipes]]
id = 1
name = "Pancakes"

[[recipes.items]]
ingredient = "Flour"
quantity = 200

[[recipes.items]]
ingredient = "Eggs"
quantity = 2
"#;
        fs::write(&catalog_path, template)?;

        println!(
            "{} Initialized {} at {}",
            "✓".green(),
            DEFAULT_CATALOG_FILE,
            catalog_path.display()
        );

        println!("\n{}", "Next steps:".cyan());
        println!("  Edit the catalog, then select recipes:");
        println!("    shoplist add Pancakes");
        println!(
            "\n  Then run {} to print the aggregated shopping list",
            "shoplist export".bright_white()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let cmd = InitCommand {
            path: Some(temp_dir.path().to_path_buf()),
            force: false,
        };

        cmd.execute().await.unwrap();

        let content = fs::read_to_string(temp_dir.path().join(DEFAULT_CATALOG_FILE)).unwrap();
        assert!(content.contains("[[ingredients]]"));
        assert!(content.contains("[[recipes]]"));

        // The template must parse as a valid catalog
        let catalog = crate::catalog::Catalog::load(&temp_dir.path().join(DEFAULT_CATALOG_FILE))
            .unwrap();
        assert_eq!(catalog.recipes.len(), 1);
    }

    #[tokio::test]
    async fn test_init_fails_if_catalog_exists() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(DEFAULT_CATALOG_FILE), "existing").unwrap();

        let cmd = InitCommand {
            path: Some(temp_dir.path().to_path_buf()),
            force: false,
        };

        let err = cmd.execute().await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(DEFAULT_CATALOG_FILE), "existing").unwrap();

        let cmd = InitCommand {
            path: Some(temp_dir.path().to_path_buf()),
            force: true,
        };

        cmd.execute().await.unwrap();
        let content = fs::read_to_string(temp_dir.path().join(DEFAULT_CATALOG_FILE)).unwrap();
        assert!(content.contains("[[recipes]]"));
    }
}
