use serde::{Deserialize, Serialize};

/// A ranked participant. `id` and `username` are fixed at insert; only the
/// rating moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub username: String,
    pub rating: i32,
}

impl Participant {
    pub fn new(id: impl Into<String>, username: impl Into<String>, rating: i32) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            rating,
        }
    }
}

/// One row of a rank query or leaderboard listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub username: String,
    pub rating: i32,
}
