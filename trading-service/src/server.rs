//! HTTP server built from a [`RestConf`]
//!
//! Routes are added one at a time, each bound to the service context. The
//! configuration drives the request timeout and body limit middleware.

use std::future::Future;
use std::sync::Arc;

use axum::handler::Handler;
use axum::routing::{on, MethodFilter};
use axum::Router;
use common::error::Result;
use common::shutdown::shutdown_signal;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::RestConf;
use crate::svc::ServiceContext;

/// A single route: method, path and handler
pub struct Route<H> {
    pub method: MethodFilter,
    pub path: &'static str,
    pub handler: H,
}

pub struct Server {
    conf: RestConf,
    router: Router,
}

impl Server {
    pub fn new(conf: &RestConf) -> Result<Self> {
        conf.validate()?;

        Ok(Self {
            conf: conf.clone(),
            router: Router::new(),
        })
    }

    /// Register `route`, handing `ctx` to its handler as state.
    ///
    /// Panics if the same method and path are registered twice.
    pub fn add_route<H, T>(&mut self, route: Route<H>, ctx: Arc<ServiceContext>)
    where
        H: Handler<T, Arc<ServiceContext>>,
        T: 'static,
    {
        let router = std::mem::take(&mut self.router);
        self.router = router.route(route.path, on(route.method, route.handler).with_state(ctx));
    }

    /// Registered routes wrapped in the configured middleware
    pub fn router(&self) -> Router {
        let mut router = self
            .router
            .clone()
            .layer(RequestBodyLimitLayer::new(self.conf.max_bytes));

        if let Some(timeout) = self.conf.timeout() {
            router = router.layer(TimeoutLayer::new(timeout));
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM
    pub async fn start(self) -> Result<()> {
        let listener = TcpListener::bind(self.conf.addr()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on `listener` until `signal` resolves, then stop
    pub async fn serve<F>(self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(service = %self.conf.name, "Listening on {}", listener.local_addr()?);

        let result = axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await;

        self.stop();
        result?;
        Ok(())
    }

    pub fn stop(&self) {
        info!(service = %self.conf.name, "Server stopped");
    }
}
