//! Health endpoint: process liveness plus a cheap probe of the post store.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET /api/health
///
/// Fetches a single-row page from the post store; the server reports
/// `degraded` rather than failing the probe when the store is unreachable.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store = match state.posts.page(1, 1).await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!("Health probe could not reach the post store: {e}");
            "unavailable"
        }
    };

    let response = HealthResponse {
        status: if store == "ok" { "ok" } else { "degraded" },
        store,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
