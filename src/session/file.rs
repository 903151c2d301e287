//! File-backed session store for the CLI.
//!
//! Each visitor of the web original gets a server-side session; the CLI
//! analog is a small TOML file of named slots, one per user, living under
//! the platform data directory by default:
//!
//! ```toml
//! [slots]
//! shoppinglist = [3, 1]
//! ```
//!
//! The whole file is rewritten atomically on every mutation. A missing or
//! empty file is an empty session; a file that exists but fails to parse is
//! an error rather than silent data loss.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{RecipeId, ShoplistError};
use crate::utils::fs::atomic_write;

use super::SessionStore;

/// On-disk shape of the session file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionDocument {
    #[serde(default)]
    slots: BTreeMap<String, Vec<RecipeId>>,
}

/// Session store persisted as a TOML file.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    document: SessionDocument,
}

impl FileSession {
    /// Open (or implicitly create) the session file at `path`.
    ///
    /// # Errors
    ///
    /// [`ShoplistError::SessionParseError`] if the file exists but is not
    /// valid TOML; I/O errors with context otherwise.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let document = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Cannot read session file: {}", path.display()))?;

            if content.trim().is_empty() {
                SessionDocument::default()
            } else {
                toml::from_str(&content)
                    .map_err(|e| ShoplistError::SessionParseError {
                        file: path.display().to_string(),
                        reason: e.to_string(),
                    })
                    .with_context(|| {
                        format!(
                            "Invalid session file: {}\n\n\
                            Delete it and rebuild the list with 'shoplist add'",
                            path.display()
                        )
                    })?
            }
        } else {
            SessionDocument::default()
        };

        debug!(slots = document.slots.len(), "opened session {}", path.display());
        Ok(Self { path, document })
    }

    /// Default session file path: `<data dir>/shoplist/session.toml`.
    ///
    /// Falls back to the current directory when the platform has no data
    /// directory (unusual, but possible in stripped-down containers).
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shoplist")
            .join("session.toml")
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.document)
            .with_context(|| "Failed to serialize session to TOML")?;
        atomic_write(&self.path, content.as_bytes())
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))
    }
}

impl SessionStore for FileSession {
    fn get(&self, key: &str) -> Option<Vec<RecipeId>> {
        self.document.slots.get(key).cloned()
    }

    fn insert(&mut self, key: &str, ids: Vec<RecipeId>) -> Result<()> {
        self.document.slots.insert(key.to_string(), ids);
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.document.slots.remove(key).is_none() {
            return Ok(());
        }
        self.persist()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.document.slots.contains_key(key)
    }
}
