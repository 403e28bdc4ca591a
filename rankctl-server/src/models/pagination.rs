//! Leaderboard paging parameters
//!
//! Query values are parsed leniently: anything missing, unparsable or out of
//! bounds falls back to the default rather than failing the request.

use serde::Deserialize;

/// Maximum rows per page
pub const MAX_LIMIT: usize = 1000;

/// Default rows per page
pub const DEFAULT_LIMIT: usize = 100;

/// Offset/limit window into the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Page {
    /// Create a page window.
    ///
    /// - Limit of 0 falls back to the default
    /// - Limit is clamped to at most 1000
    pub fn new(offset: usize, limit: usize) -> Self {
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        Self {
            offset,
            limit: limit.min(MAX_LIMIT),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Raw query parameters for `GET /leaderboard`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        let limit = params
            .limit
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|v| *v > 0)
            .map(|v| usize::try_from(v).unwrap_or(MAX_LIMIT))
            .unwrap_or(DEFAULT_LIMIT);

        let offset = params
            .offset
            .as_deref()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|v| usize::try_from(v).unwrap_or(usize::MAX))
            .unwrap_or(0);

        Self::new(offset, limit)
    }
}
