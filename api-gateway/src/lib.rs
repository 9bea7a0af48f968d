//! API Gateway for the QuantFi backend

pub mod config;
pub mod router;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// The gateway application: registered routes plus middleware
pub fn app(log_level: Level) -> Router {
    with_middleware(router::register(Router::new()), log_level)
}

/// Wrap `router` with request ids, HTTP tracing and panic recovery.
///
/// A panicking handler produces a 500 response; the server keeps running.
pub fn with_middleware(router: Router, log_level: Level) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(log_level))
                .on_request(DefaultOnRequest::new().level(log_level))
                .on_response(DefaultOnResponse::new().level(log_level)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
