//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub participants: usize,
    pub uptime_seconds: u64,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        participants: state.index().count(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::churn::ChurnPolicy;
    use rankctl_core::{Participant, RankIndex};
    use std::sync::Arc;

    #[tokio::test]
    async fn health_returns_ok() {
        let index = Arc::new(RankIndex::new());
        index.insert(Participant::new("1", "solo", 1000)).unwrap();
        let state = AppState::new(index, ChurnPolicy::default());

        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.participants, 1);
    }
}
