//! Per-user rank lookup and rating update

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use rankctl_core::RankedEntry;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::ValidUsername;
use crate::models::{Username, ValidationError};
use crate::state::AppState;

/// Rating update request
#[derive(Debug, Deserialize)]
pub struct UpdateUserScoreRequest {
    pub username: String,
    pub rating: i32,
}

/// Rating update response
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateUserScoreResponse {
    pub message: String,
    pub user: RankedEntry,
}

/// GET /user/{username} - rank, username and rating
async fn get_user(
    State(state): State<AppState>,
    ValidUsername(username): ValidUsername,
) -> Result<Json<RankedEntry>, ApiError> {
    let entry = state.index().get_rank(username.as_str())?;
    Ok(Json(entry))
}

/// GET /user/ - path without a username
async fn missing_username() -> ApiError {
    ApiError::Validation(ValidationError::Empty { field: "username" })
}

/// POST /update-user-score - set one user's rating
async fn update_user_score(
    State(state): State<AppState>,
    payload: Result<Json<UpdateUserScoreRequest>, JsonRejection>,
) -> Result<Json<UpdateUserScoreResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ValidationError::InvalidBody {
        reason: rejection.body_text(),
    })?;
    let username = Username::new(&req.username)?;

    let user = state
        .index()
        .update_rating_ranked(username.as_str(), req.rating)?;

    tracing::debug!(
        username = %user.username,
        rating = user.rating,
        rank = user.rank,
        "user score updated"
    );

    Ok(Json(UpdateUserScoreResponse {
        message: "User score updated".to_string(),
        user,
    }))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/", get(missing_username))
        .route("/user/{username}", get(get_user))
        .route("/update-user-score", post(update_user_score))
}
