//! Bulk randomized rating churn
//!
//! Picks a random subset of participants without replacement and assigns
//! each a uniformly random rating. Individual update failures are logged
//! and skipped; the report carries the number that succeeded.

use rand::seq::index::sample;
use rand::Rng;
use rankctl_core::RankIndex;
use thiserror::Error;
use tracing::{info, warn};

/// Default lower bound on participants touched per churn
pub const DEFAULT_MIN_UPDATES: usize = 5000;

/// Default upper bound on participants touched per churn
pub const DEFAULT_MAX_UPDATES: usize = 7000;

/// How many participants one churn run touches.
///
/// The target is drawn uniformly from `min_updates..=max_updates` and then
/// clamped to the participant count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChurnPolicy {
    min_updates: usize,
    max_updates: usize,
}

impl ChurnPolicy {
    pub fn new(min_updates: usize, max_updates: usize) -> Self {
        Self {
            min_updates: min_updates.min(max_updates),
            max_updates: min_updates.max(max_updates),
        }
    }

    pub fn min_updates(&self) -> usize {
        self.min_updates
    }

    pub fn max_updates(&self) -> usize {
        self.max_updates
    }
}

impl Default for ChurnPolicy {
    fn default() -> Self {
        Self {
            min_updates: DEFAULT_MIN_UPDATES,
            max_updates: DEFAULT_MAX_UPDATES,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChurnError {
    #[error("no users in the system")]
    NoParticipants,
}

/// Outcome of a churn run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChurnReport {
    /// Participants whose rating update succeeded
    pub updated: usize,
    /// Participant count after the run
    pub total: usize,
}

/// Assign random ratings to a random subset of the index.
pub fn randomize_ratings<R: Rng + ?Sized>(
    index: &RankIndex,
    policy: ChurnPolicy,
    rng: &mut R,
) -> Result<ChurnReport, ChurnError> {
    let names = index.all_names();
    if names.is_empty() {
        return Err(ChurnError::NoParticipants);
    }

    let target = rng
        .gen_range(policy.min_updates..=policy.max_updates)
        .min(names.len());
    let range = index.range();

    let mut updated = 0;
    for idx in sample(rng, names.len(), target) {
        let username = &names[idx];
        let rating = rng.gen_range(range.min()..=range.max());

        match index.update_rating(username, rating) {
            Ok(()) => updated += 1,
            Err(err) => warn!(username = %username, error = %err, "churn update failed"),
        }
    }

    let report = ChurnReport {
        updated,
        total: index.count(),
    };
    info!(updated = report.updated, total = report.total, "churn complete");

    Ok(report)
}
