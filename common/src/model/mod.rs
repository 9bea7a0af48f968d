//! Payload types shared by the HTTP services

pub mod health;

pub use health::HealthStatus;
