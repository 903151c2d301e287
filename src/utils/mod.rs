//! Cross-cutting utilities.
//!
//! Currently limited to file-system helpers shared by the catalog and
//! session persistence layers.

pub mod fs;
