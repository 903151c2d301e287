//! Per-visitor session state: the shopping list.
//!
//! The shopping list is an ordered, duplicate-free sequence of recipe ids
//! kept under one named slot ([`SESSION_KEY`]) inside a caller-owned session
//! store. The store is injected through the [`SessionStore`] trait rather
//! than reached as ambient state, so its lifecycle belongs to the handle the
//! caller constructed it with.
//!
//! Two stores ship with the crate: [`MemorySession`] for tests and
//! embedders, and [`FileSession`](file::FileSession) for the CLI, which
//! persists the slot map as a TOML file.
//!
//! Absence of the slot and an empty slot behave identically (length 0) but
//! are observably distinct: [`ShoppingList::clear`] removes the slot
//! entirely, while removing the last id leaves an empty slot behind.

pub mod file;

use std::collections::HashMap;

use anyhow::Result;
use tracing::debug;

use crate::aggregate::{self, AggregatedRow};
use crate::catalog::{Recipe, RecipeStore};
use crate::core::RecipeId;

/// Name of the session slot holding the shopping list.
pub const SESSION_KEY: &str = "shoppinglist";

/// A caller-owned mapping of named slots to recipe id sequences.
///
/// The shopping list reads and writes exactly one key, [`SESSION_KEY`];
/// other slots in the same store are left untouched. Implementations decide
/// persistence: [`MemorySession`] keeps slots in memory, `FileSession`
/// rewrites a TOML file on every mutation.
pub trait SessionStore {
    /// Read the id sequence stored under `key`, if the slot exists.
    fn get(&self, key: &str) -> Option<Vec<RecipeId>>;

    /// Store `ids` under `key`, creating or replacing the slot.
    fn insert(&mut self, key: &str, ids: Vec<RecipeId>) -> Result<()>;

    /// Remove the slot entirely. Removing an absent slot is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Whether the slot exists (even when it holds an empty sequence).
    fn contains_key(&self, key: &str) -> bool;
}

/// In-memory session store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    slots: HashMap<String, Vec<RecipeId>>,
}

impl MemorySession {
    /// Create an empty in-memory session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<Vec<RecipeId>> {
        self.slots.get(key).cloned()
    }

    fn insert(&mut self, key: &str, ids: Vec<RecipeId>) -> Result<()> {
        self.slots.insert(key.to_string(), ids);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }

    fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

/// The shopping list: an ordered set of recipe ids bound to a session store.
///
/// Construction reads the current slot; every mutation writes it back, so
/// the store always reflects the last completed operation. One invocation
/// owns the list at a time; concurrent sessions racing on the same store are
/// last-write-wins, consistent with session-store semantics.
#[derive(Debug)]
pub struct ShoppingList<S: SessionStore> {
    store: S,
    ids: Vec<RecipeId>,
}

impl<S: SessionStore> ShoppingList<S> {
    /// Bind a shopping list to `store`, reading the current slot.
    ///
    /// A missing slot yields an empty list; the slot is not created until
    /// the first mutation.
    pub fn new(store: S) -> Self {
        let ids = store.get(SESSION_KEY).unwrap_or_default();
        Self { store, ids }
    }

    /// Add a recipe id to the end of the list.
    ///
    /// Adding an id that is already present is a no-op; the list never
    /// holds duplicates. The updated sequence is persisted to the store
    /// before the in-memory view commits: a failed write leaves the list
    /// unchanged.
    pub fn add(&mut self, id: RecipeId) -> Result<()> {
        if self.ids.contains(&id) {
            debug!(id, "recipe already in shopping list");
            return Ok(());
        }
        let mut next = self.ids.clone();
        next.push(id);
        self.commit(next)
    }

    /// Remove a recipe id if present; removing an absent id is a no-op.
    ///
    /// Persists before committing, like [`add`](Self::add).
    pub fn remove(&mut self, id: RecipeId) -> Result<()> {
        if !self.ids.contains(&id) {
            debug!(id, "recipe not in shopping list, nothing to remove");
            return Ok(());
        }
        let next: Vec<RecipeId> = self.ids.iter().copied().filter(|&held| held != id).collect();
        self.commit(next)
    }

    /// Empty the list and remove the session slot entirely.
    ///
    /// After `clear`, the store no longer contains [`SESSION_KEY`] - a
    /// distinct state from a slot holding an empty sequence. If the store
    /// fails to drop the slot, the in-memory list stays unchanged.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(SESSION_KEY)?;
        self.ids.clear();
        Ok(())
    }

    /// Number of recipes currently selected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the list holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` is in the list.
    #[must_use]
    pub fn contains(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    /// The selected ids, in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[RecipeId] {
        &self.ids
    }

    /// Consume the list and return the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Resolve the selected ids to recipes with one batch fetch.
    ///
    /// An empty list returns an empty Vec without touching the store's
    /// fetch path (an unrestricted fetch would return every recipe).
    /// Unknown ids are silently omitted.
    pub fn recipes<R: RecipeStore>(&self, recipe_store: &R) -> Vec<Recipe> {
        if self.ids.is_empty() {
            return Vec::new();
        }
        recipe_store.fetch_by_ids(&self.ids)
    }

    /// Iterate over the resolved recipes.
    ///
    /// Issues exactly one batch fetch per iteration pass.
    pub fn iter_recipes<R: RecipeStore>(&self, recipe_store: &R) -> impl Iterator<Item = Recipe> {
        self.recipes(recipe_store).into_iter()
    }

    /// Reduce the selected recipes' ingredient lines into the consolidated
    /// shopping table. See [`aggregate::shopping_table`].
    pub fn aggregate<R: RecipeStore>(&self, recipe_store: &R) -> Vec<AggregatedRow> {
        aggregate::shopping_table(recipe_store, &self.ids)
    }

    fn commit(&mut self, next: Vec<RecipeId>) -> Result<()> {
        self.store.insert(SESSION_KEY, next.clone())?;
        self.ids = next;
        Ok(())
    }
}
