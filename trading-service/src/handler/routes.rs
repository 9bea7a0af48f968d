use std::sync::Arc;

use axum::routing::MethodFilter;

use crate::handler::health_handler;
use crate::server::{Route, Server};
use crate::svc::ServiceContext;

/// Register every trading-service route on `server`
pub fn register_handlers(server: &mut Server, ctx: Arc<ServiceContext>) {
    server.add_route(
        Route {
            method: MethodFilter::GET,
            path: "/api/health",
            handler: health_handler,
        },
        ctx,
    );
}
