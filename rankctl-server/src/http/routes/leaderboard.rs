//! Leaderboard listing endpoint

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use rankctl_core::RankedEntry;
use serde::{Deserialize, Serialize};

use crate::models::{Page, PageParams};
use crate::state::AppState;

/// Leaderboard page response
#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub users: Vec<RankedEntry>,
}

/// GET /leaderboard - ranked page of users
async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<LeaderboardResponse> {
    let page = Page::from(params);
    let users = state.index().list_range(page.offset, page.limit);

    Json(LeaderboardResponse { users })
}

/// Leaderboard routes
pub fn router() -> Router<AppState> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}
