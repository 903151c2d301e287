//! Command-line interface for shoplist.
//!
//! The CLI is a thin layer over the library: it resolves the catalog and
//! session file paths, binds the shopping list, and dispatches to one
//! subcommand per module. Verbosity flags translate to `RUST_LOG` through
//! [`CliConfig`] so the same configuration path serves tests and
//! programmatic callers.

pub mod add;
pub mod clear;
pub mod common;
pub mod export;
pub mod ingredients;
pub mod init;
pub mod list;
pub mod remove;
pub mod search;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::io::DEFAULT_CATALOG_FILE;
use crate::session::file::FileSession;

/// Recipe catalog and shopping-list aggregation.
#[derive(Parser)]
#[command(name = "shoplist", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the catalog file (defaults to ./shoplist.toml)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to the session file (defaults to the platform data directory)
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Configuration derived from global CLI flags.
///
/// Exists as its own type so tests and embedders can inject a configuration
/// without parsing arguments.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the `RUST_LOG` environment variable.
    /// `None` preserves the existing value.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Apply the configuration to the process environment.
    pub fn apply_to_env(&self) {
        if let Some(ref level) = self.log_level {
            // SAFETY: called once at startup before any threads are spawned
            unsafe { std::env::set_var("RUST_LOG", level) };
        }
    }
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Create a new catalog file with a commented template
    Init(init::InitCommand),

    /// Add a recipe to the shopping list
    Add(add::AddCommand),

    /// Remove a recipe from the shopping list
    Remove(remove::RemoveCommand),

    /// Empty the shopping list
    Clear(clear::ClearCommand),

    /// Show the recipes currently selected
    List(list::ListCommand),

    /// Set a recipe's ingredients from form-style key=value fields
    Ingredients(ingredients::IngredientsCommand),

    /// Search catalog ingredients by title
    Search(search::SearchCommand),

    /// Print or write the aggregated shopping table
    Export(export::ExportCommand),
}

impl Cli {
    /// Execute the parsed command with the default configuration.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the verbosity flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("off".to_string())
        } else {
            None
        };

        CliConfig { log_level }
    }

    /// Execute with an injected configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply_to_env();
        init_logging();

        let catalog_path = self
            .catalog
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE));
        let session_path = self.session.unwrap_or_else(FileSession::default_path);

        match self.command {
            Commands::Init(cmd) => cmd.execute().await,
            Commands::Add(cmd) => cmd.execute(&catalog_path, &session_path).await,
            Commands::Remove(cmd) => cmd.execute(&catalog_path, &session_path).await,
            Commands::Clear(cmd) => cmd.execute(&session_path).await,
            Commands::List(cmd) => cmd.execute(&catalog_path, &session_path).await,
            Commands::Ingredients(cmd) => cmd.execute(&catalog_path).await,
            Commands::Search(cmd) => cmd.execute(&catalog_path).await,
            Commands::Export(cmd) => cmd.execute(&catalog_path, &session_path).await,
        }
    }
}

/// Initialize the tracing subscriber from `RUST_LOG`.
///
/// `try_init` so repeated calls (tests driving multiple commands in one
/// process) are harmless.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .try_init();
}
