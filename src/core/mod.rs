//! Core types shared across the crate.
//!
//! Holds the [`RecipeId`] identifier type and the error machinery
//! ([`ShoplistError`], [`ErrorContext`], [`user_friendly_error`]).

pub mod error;

pub use error::{ErrorContext, ShoplistError, user_friendly_error};

/// Opaque recipe identifier.
///
/// Only equality and hashing are assumed; no structure beyond that. Ids are
/// assigned in the catalog file and referenced by the session list.
pub type RecipeId = u64;
