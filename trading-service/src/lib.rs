//! Trading service for the QuantFi backend
//!
//! Startup runs in dependency order: load [`config::RestConf`], build the
//! [`svc::ServiceContext`], build the [`server::Server`], register the
//! [`handler`] routes, then serve.

pub mod config;
pub mod handler;
pub mod server;
pub mod svc;

pub use config::RestConf;
pub use server::{Route, Server};
pub use svc::ServiceContext;
