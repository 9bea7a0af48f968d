use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use common::HealthStatus;

use crate::svc::ServiceContext;

/// `GET /api/health`
pub async fn health_handler(State(_ctx): State<Arc<ServiceContext>>) -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
