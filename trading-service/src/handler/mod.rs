//! Route handlers for the trading service

mod health;
mod routes;

pub use health::health_handler;
pub use routes::register_handlers;
