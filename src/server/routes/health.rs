use axum::{Router, routing::get};

use crate::server::router::AppState;

/// Liveness check: answers as long as the process can serve requests.
async fn health() -> &'static str {
    "Healthy"
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
