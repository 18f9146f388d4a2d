//! Error types for the timeboxer library.

use std::path::PathBuf;

use thiserror::Error;

use crate::generation::GenerationError;

/// Comprehensive error type for all session operations.
#[derive(Error, Debug)]
pub enum TimeboxError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The generation endpoint could not be reached
    #[error("Error generating plan: {source}")]
    Generation {
        #[from]
        source: GenerationError,
    },
    /// A generation request is already outstanding for this session
    #[error("A plan is already being generated")]
    GenerationInProgress,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TimeboxError {
        TimeboxError::Database {
            message: self.message,
            source,
        }
    }
}

impl TimeboxError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TimeboxError::database(message).with_source(e))
    }
}

/// Result type alias for timeboxer operations
pub type Result<T> = std::result::Result<T, TimeboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to read value").unwrap_err();
        match err {
            TimeboxError::Database { message, .. } => assert_eq!(message, "Failed to read value"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_generation_error_message() {
        let err = TimeboxError::from(GenerationError::InvalidResponse("empty".to_string()));
        assert_eq!(
            err.to_string(),
            "Error generating plan: Invalid response: empty"
        );
    }
}
