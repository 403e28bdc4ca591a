//! Synthetic participant generator used to populate a fresh index.

use rand::Rng;
use tracing::{info, warn};

use crate::index::RankIndex;
use crate::participant::Participant;

/// How often seeding reports progress
const PROGRESS_EVERY: usize = 2000;

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub failed: usize,
}

/// Insert `count` participants named `user_1..=user_count` with uniformly
/// random ratings from the index range.
///
/// A rejected insert (e.g. the name is already taken) is logged and counted;
/// seeding carries on with the next participant.
pub fn seed_participants<R: Rng + ?Sized>(
    index: &RankIndex,
    count: usize,
    rng: &mut R,
) -> SeedReport {
    let range = index.range();
    let mut report = SeedReport::default();

    info!(count, "seeding participants");
    for i in 1..=count {
        let participant = Participant::new(
            format!("user_id_{}", i),
            format!("user_{}", i),
            rng.gen_range(range.min()..=range.max()),
        );

        match index.insert(participant) {
            Ok(()) => report.inserted += 1,
            Err(err) => {
                warn!(error = %err, "failed to seed user_{}", i);
                report.failed += 1;
            }
        }

        if i % PROGRESS_EVERY == 0 {
            info!(seeded = i, "seeding progress");
        }
    }
    info!(inserted = report.inserted, failed = report.failed, "seeding complete");

    report
}
