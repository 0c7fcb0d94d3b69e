//! Health check endpoint

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;
use crate::store::StoreStatus;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Registry store connection state. Reading it never connects.
    pub store: StoreStatus,
}

/// GET /health - liveness plus the registry store's connection state
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store: state.store().status(),
    })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::{MemoryStore, MongoStore};

    #[tokio::test]
    async fn health_reports_store_state() {
        let Json(body) = health(State(AppState::new(Arc::new(MemoryStore::new())))).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.store, StoreStatus::Connected);

        let Json(body) = health(State(AppState::new(Arc::new(MongoStore::from_uri(None))))).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.store, StoreStatus::Unconfigured);
    }
}
