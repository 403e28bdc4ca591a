//! rankctl-core: bucketed leaderboard index
//!
//! Participants hold an integer rating inside a fixed [`RatingRange`].
//! [`RankIndex`] answers dense ranks and rank-ordered pages under
//! concurrent access; [`seed`] fills a fresh index with synthetic players.

pub mod error;
pub mod index;
pub mod participant;
pub mod range;
pub mod seed;

pub use error::{RankError, Result};
pub use index::RankIndex;
pub use participant::{Participant, RankedEntry};
pub use range::{RatingRange, MAX_RATING, MIN_RATING};
pub use seed::{seed_participants, SeedReport};
