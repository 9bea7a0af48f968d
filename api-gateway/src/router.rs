//! Gateway route table

use axum::{routing::get, Json, Router};
use common::HealthStatus;

/// Register the `/api` route group on `router`
pub fn register(router: Router) -> Router {
    let api = Router::new().route("/health", get(health));

    router.nest("/api", api)
}

/// `GET /api/health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
