//! Error types for the QuantFi backend
//!
//! This module provides the error type shared by the gateway, the trading
//! service and the database module. Startup paths propagate these errors up
//! to `main`, which reports them and exits.

use std::fmt::Display;
use thiserror::Error;

/// Backend error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The shared database handle was requested before it was initialized
    #[error("database client not initialized")]
    NotInitialized,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O error (file access, socket binding)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::Configuration(msg) => Error::Configuration(format!("{}: {}", context, msg)),
                // Source errors are flattened to text so the context can be prepended
                Error::Io(e) => Error::Configuration(format!("{}: {}", context, e)),
                Error::Yaml(e) => Error::Configuration(format!("{}: {}", context, e)),
                Error::Serialization(e) => Error::Configuration(format!("{}: {}", context, e)),
                // Database errors pass through with their source intact
                err @ (Error::Database(_) | Error::NotInitialized) => err,
            }
        })
    }
}
