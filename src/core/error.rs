//! Error handling for shoplist.
//!
//! The error system is built around two types:
//! - [`ShoplistError`] - strongly-typed failure cases for precise handling
//! - [`ErrorContext`] - wrapper that adds user-friendly suggestions and
//!   details for CLI display
//!
//! Common standard library and parsing errors convert automatically:
//! - [`std::io::Error`] → [`ShoplistError::IoError`]
//! - [`toml::de::Error`] → [`ShoplistError::TomlError`]
//! - [`toml::ser::Error`] → [`ShoplistError::TomlSerError`]
//!
//! Use [`user_friendly_error`] at the CLI boundary to turn any
//! `anyhow::Error` into a colored, actionable message.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for shoplist operations.
///
/// Each variant represents a specific failure mode with enough context
/// (file paths, ids, parse reasons) for the CLI to explain it to the user.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum ShoplistError {
    /// The catalog file does not exist.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// Path that was searched
        path: String,
    },

    /// The catalog file exists but is not valid TOML / valid catalog data.
    #[error("Failed to parse catalog file {file}: {reason}")]
    CatalogParseError {
        /// Path to the catalog file
        file: String,
        /// Parser error message
        reason: String,
    },

    /// The session file exists but could not be parsed.
    #[error("Failed to parse session file {file}: {reason}")]
    SessionParseError {
        /// Path to the session file
        file: String,
        /// Parser error message
        reason: String,
    },

    /// A recipe referenced by id or name does not exist in the catalog.
    #[error("Recipe not found in catalog: {name}")]
    RecipeNotFound {
        /// The id or name that failed to resolve
        name: String,
    },

    /// File system operation failed.
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// Operation that failed (e.g. "read", "write")
        operation: String,
        /// Affected path
        path: String,
    },

    /// I/O error from the standard library.
    #[error("IO error: {message}")]
    IoError {
        /// Underlying error message
        message: String,
    },

    /// TOML deserialization error.
    #[error("TOML parsing error: {0}")]
    TomlError(String),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    /// Catch-all for errors that don't fit other variants.
    #[error("{message}")]
    Other {
        /// Error description
        message: String,
    },
}

impl From<std::io::Error> for ShoplistError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ShoplistError {
    fn from(err: toml::de::Error) -> Self {
        Self::TomlError(err.to_string())
    }
}

impl From<toml::ser::Error> for ShoplistError {
    fn from(err: toml::ser::Error) -> Self {
        Self::TomlSerError(err.to_string())
    }
}

/// A [`ShoplistError`] enriched with a suggestion and details for display.
///
/// Suggestions are actionable steps (shown green); details explain why the
/// error occurred (shown yellow). Built with [`ErrorContext::with_suggestion`]
/// and [`ErrorContext::with_details`].
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ShoplistError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a basic error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ShoplistError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining why the error occurred.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Attach default suggestions and details to known error variants.
fn create_error_context(error: ShoplistError) -> ErrorContext {
    match &error {
        ShoplistError::CatalogNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Run 'shoplist init' to create a catalog, or pass --catalog <path>")
            .with_details("shoplist needs a catalog file describing recipes and ingredients"),
        ShoplistError::CatalogParseError { .. } => ErrorContext::new(error)
            .with_suggestion(
                "Check the TOML syntax in the catalog file. Verify quotes, brackets, and keys",
            )
            .with_details("The catalog file contains invalid TOML or unexpected fields"),
        ShoplistError::SessionParseError { .. } => ErrorContext::new(error)
            .with_suggestion("Delete the session file and rebuild the list with 'shoplist add'")
            .with_details("The session file may be corrupted or was edited by hand"),
        ShoplistError::RecipeNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("List catalog recipes with 'shoplist list --format json' or check the catalog file")
            .with_details("Recipes are matched by numeric id or by exact name"),
        _ => ErrorContext::new(error),
    }
}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Downcasts to known error types and attaches contextual suggestions;
/// anything unrecognized falls through to a generic message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(shoplist_error) = error.downcast_ref::<ShoplistError>() {
        return create_error_context(shoplist_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(ShoplistError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check file ownership and permissions")
                .with_details(
                    "shoplist does not have permission to read or write one of its files",
                );
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(ShoplistError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(ShoplistError::TomlError(toml_error.to_string()))
            .with_suggestion("Check the TOML syntax. Verify quotes, brackets, and indentation");
    }

    // Fall through with the full anyhow chain as the message
    ErrorContext::new(ShoplistError::Other {
        message: format!("{error:#}"),
    })
}
