//! Clear the shopping list.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use super::common::open_list;

/// Command to empty the shopping list and drop its session slot.
#[derive(Args)]
pub struct ClearCommand {}

impl ClearCommand {
    pub async fn execute(self, session_path: &Path) -> Result<()> {
        let mut list = open_list(session_path)?;
        let count = list.len();
        list.clear()?;

        println!(
            "{} Cleared the shopping list ({count} removed)",
            "✓".green()
        );
        Ok(())
    }
}
