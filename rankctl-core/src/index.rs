//! Bucketed rank index
//!
//! Participants are grouped into one bucket per rating value. A rank query
//! counts occupied buckets above a rating instead of sorting participants,
//! so its cost is bounded by the size of the rating range.
//!
//! All state sits behind a single reader/writer lock:
//! - `insert` / `update_rating` / `update_rating_ranked` take the write lock
//!   for their whole duration
//! - `get_rank` / `list_range` / `count` / `all_names` share the read lock
//!
//! A reader therefore never sees a participant missing from every bucket or
//! present in two.

use std::collections::{BTreeSet, HashMap};

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{RankError, Result};
use crate::participant::{Participant, RankedEntry};
use crate::range::RatingRange;

/// Concurrent leaderboard index over a bounded rating range.
#[derive(Debug)]
pub struct RankIndex {
    range: RatingRange,
    ladder: RwLock<Ladder>,
}

#[derive(Debug)]
struct Ladder {
    participants: HashMap<String, Participant>,
    /// One ordered set of usernames per rating, lowest rating first
    buckets: Vec<BTreeSet<String>>,
    /// Every username ever inserted, in insertion order
    names: Vec<String>,
}

impl Ladder {
    fn new(range: RatingRange) -> Self {
        Self {
            participants: HashMap::new(),
            buckets: vec![BTreeSet::new(); range.len()],
            names: Vec::new(),
        }
    }
}

impl RankIndex {
    /// Create an empty index over the default `100..=5000` range.
    pub fn new() -> Self {
        Self::with_range(RatingRange::default())
    }

    /// Create an empty index over a custom rating range.
    pub fn with_range(range: RatingRange) -> Self {
        Self {
            range,
            ladder: RwLock::new(Ladder::new(range)),
        }
    }

    pub fn range(&self) -> RatingRange {
        self.range
    }

    /// Add a new participant.
    ///
    /// # Errors
    /// - `DuplicateKey` if the username is already indexed (checked first)
    /// - `OutOfRange` if the rating falls outside the index range
    pub fn insert(&self, participant: Participant) -> Result<()> {
        let mut ladder = self.ladder.write();

        if ladder.participants.contains_key(&participant.username) {
            return Err(RankError::duplicate_key(participant.username));
        }
        self.range.check(participant.rating)?;

        let slot = self.range.slot(participant.rating);
        ladder.buckets[slot].insert(participant.username.clone());
        ladder.names.push(participant.username.clone());
        ladder
            .participants
            .insert(participant.username.clone(), participant);

        Ok(())
    }

    /// Move a participant to a new rating.
    ///
    /// Setting the current rating again is a successful no-op.
    ///
    /// # Errors
    /// - `NotFound` if the username is not indexed (checked first)
    /// - `OutOfRange` if the new rating falls outside the index range
    pub fn update_rating(&self, username: &str, rating: i32) -> Result<()> {
        let mut ladder = self.ladder.write();
        self.move_rating(&mut ladder, username, rating)
    }

    /// Move a participant and report their rank from the same write lock,
    /// so the returned entry reflects this update and no later one.
    pub fn update_rating_ranked(&self, username: &str, rating: i32) -> Result<RankedEntry> {
        let mut ladder = self.ladder.write();
        self.move_rating(&mut ladder, username, rating)?;
        self.ranked(&ladder, username)
    }

    fn move_rating(&self, ladder: &mut Ladder, username: &str, rating: i32) -> Result<()> {
        let participant = ladder
            .participants
            .get_mut(username)
            .ok_or_else(|| RankError::not_found(username))?;
        self.range.check(rating)?;

        let old = participant.rating;
        if old == rating {
            return Ok(());
        }

        ladder.buckets[self.range.slot(old)].remove(username);
        ladder.buckets[self.range.slot(rating)].insert(username.to_owned());
        participant.rating = rating;

        debug!(username, old, new = rating, "rating moved");
        Ok(())
    }

    /// Dense rank of a participant: one plus the number of occupied ratings
    /// strictly above theirs.
    pub fn get_rank(&self, username: &str) -> Result<RankedEntry> {
        let ladder = self.ladder.read();
        self.ranked(&ladder, username)
    }

    fn ranked(&self, ladder: &Ladder, username: &str) -> Result<RankedEntry> {
        let participant = ladder
            .participants
            .get(username)
            .ok_or_else(|| RankError::not_found(username))?;

        let above = self.range.slot(participant.rating) + 1;
        let occupied = ladder.buckets[above..]
            .iter()
            .filter(|bucket| !bucket.is_empty())
            .count();

        Ok(RankedEntry {
            rank: occupied as u32 + 1,
            username: participant.username.clone(),
            rating: participant.rating,
        })
    }

    /// Page through the leaderboard in rank order.
    ///
    /// Ordering is descending rating, ties by ascending username. Ranks are
    /// dense and count buckets skipped by `offset`, so any page carries the
    /// same rank numbers as the full listing. Returns an owned snapshot.
    pub fn list_range(&self, offset: usize, limit: usize) -> Vec<RankedEntry> {
        if limit == 0 {
            return Vec::new();
        }

        let ladder = self.ladder.read();
        let mut result = Vec::with_capacity(limit.min(ladder.participants.len()));
        let mut rank: u32 = 0;
        let mut skipped = 0usize;

        for (slot, bucket) in ladder.buckets.iter().enumerate().rev() {
            if result.len() >= limit {
                break;
            }
            if bucket.is_empty() {
                continue;
            }
            rank += 1;

            if skipped + bucket.len() <= offset {
                skipped += bucket.len();
                continue;
            }

            let rating = self.range.rating_at(slot);
            let skip_here = offset - skipped;
            skipped = offset;

            let wanted = limit - result.len();
            result.extend(
                bucket
                    .iter()
                    .skip(skip_here)
                    .take(wanted)
                    .map(|username| RankedEntry {
                        rank,
                        username: username.clone(),
                        rating,
                    }),
            );
        }

        result
    }

    /// Number of indexed participants.
    pub fn count(&self) -> usize {
        self.ladder.read().participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Every username ever inserted, in insertion order. Returns a copy.
    pub fn all_names(&self) -> Vec<String> {
        self.ladder.read().names.clone()
    }

    /// Cloned participant record.
    pub fn get(&self, username: &str) -> Option<Participant> {
        self.ladder.read().participants.get(username).cloned()
    }

    /// Ratings whose bucket currently lists `username`. Exactly one entry
    /// for an indexed participant, none otherwise.
    pub fn buckets_containing(&self, username: &str) -> Vec<i32> {
        let ladder = self.ladder.read();
        ladder
            .buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| bucket.contains(username))
            .map(|(slot, _)| self.range.rating_at(slot))
            .collect()
    }
}

impl Default for RankIndex {
    fn default() -> Self {
        Self::new()
    }
}
