//! Bulk rating churn endpoint

use axum::{extract::State, routing::post, Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::churn::randomize_ratings;
use crate::http::error::ApiError;
use crate::state::AppState;

/// Churn response
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateScoreResponse {
    pub message: String,
    pub updated_users: usize,
    pub total_users: usize,
}

/// POST /update-score - randomize ratings for a random subset of users
async fn update_score(
    State(state): State<AppState>,
) -> Result<Json<UpdateScoreResponse>, ApiError> {
    let index = state.index().clone();
    let policy = state.churn_policy();

    // Thousands of write-locked updates; keep them off the async workers
    let report = tokio::task::spawn_blocking(move || {
        let mut rng = StdRng::from_entropy();
        randomize_ratings(&index, policy, &mut rng)
    })
    .await
    .map_err(|e| ApiError::Internal {
        message: format!("churn task failed: {}", e),
    })??;

    Ok(Json(UpdateScoreResponse {
        message: "Score update completed".to_string(),
        updated_users: report.updated,
        total_users: report.total,
    }))
}

/// Score routes
pub fn router() -> Router<AppState> {
    Router::new().route("/update-score", post(update_score))
}
