//! Bounded rating domain

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// Lowest rating accepted by the default range
pub const MIN_RATING: i32 = 100;

/// Highest rating accepted by the default range
pub const MAX_RATING: i32 = 5000;

/// Closed interval of ratings an index accepts.
///
/// The range is fixed when the index is built; ratings outside it are
/// rejected rather than growing the bucket array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRange {
    min: i32,
    max: i32,
}

impl RatingRange {
    /// Create a range. Bounds are swapped if given in reverse order.
    pub fn new(min: i32, max: i32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of distinct ratings, i.e. the number of buckets.
    pub fn len(&self) -> usize {
        (self.max as i64 - self.min as i64 + 1) as usize
    }

    /// Always false; a range holds at least one rating.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, rating: i32) -> bool {
        (self.min..=self.max).contains(&rating)
    }

    /// Reject ratings outside the range.
    pub fn check(&self, rating: i32) -> Result<()> {
        if self.contains(rating) {
            Ok(())
        } else {
            Err(RankError::OutOfRange {
                rating,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Bucket slot for a rating already known to be in range.
    pub(crate) fn slot(&self, rating: i32) -> usize {
        (rating as i64 - self.min as i64) as usize
    }

    /// Rating held by a bucket slot.
    pub(crate) fn rating_at(&self, slot: usize) -> i32 {
        (self.min as i64 + slot as i64) as i32
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self {
            min: MIN_RATING,
            max: MAX_RATING,
        }
    }
}
