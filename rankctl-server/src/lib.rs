//! rankctl-server: HTTP transport for the rank index
//!
//! Exposes leaderboard listing, per-user rank lookup, single rating updates
//! and bulk rating churn over JSON.

pub mod churn;
pub mod http;
pub mod models;
pub mod state;

pub use churn::{randomize_ratings, ChurnError, ChurnPolicy, ChurnReport};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
