//! Error types for the listkeeper components.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the listkeeper components.
#[derive(Error, Debug)]
pub enum Error {
    /// A named list was looked up but does not exist.
    #[error("List not found: {name}")]
    ListNotFound {
        /// The requested list name.
        name: String,
    },

    /// An item identifier could not be parsed.
    #[error("Invalid item id: {value}")]
    InvalidItemId {
        /// The rejected identifier string.
        value: String,
    },

    /// Document store error.
    #[error("Database error: {message}")]
    Database {
        /// Error message from the driver.
        message: String,
    },

    /// Template rendering error.
    #[error("Render error: {message}")]
    Render {
        /// Error message from the template engine.
        message: String,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this error means a requested resource is absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound { .. })
    }

    /// Creates a database error with the given message.
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Creates a render error with the given message.
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Creates a configuration error with the given message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a list-not-found error for the given name.
    #[must_use]
    pub fn list_not_found(name: impl Into<String>) -> Self {
        Self::ListNotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::list_not_found("Groceries");
        assert_eq!(err.to_string(), "List not found: Groceries");

        let err = Error::database("connection reset");
        assert_eq!(err.to_string(), "Database error: connection reset");
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::list_not_found("Chores").is_not_found());
        assert!(!Error::database("boom").is_not_found());
    }
}
