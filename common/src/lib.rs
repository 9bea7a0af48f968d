//! Common types and utilities for the QuantFi backend
//!
//! This library holds what the gateway and the trading service share: the
//! error type, the process-wide database handle, logging setup and the
//! health payload.

pub mod error;
pub mod db;
pub mod logging;
pub mod model;
pub mod shutdown;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use model::HealthStatus;

// Re-export database types
pub use db::{ConnectionCell, DbOptions, DbPool};
