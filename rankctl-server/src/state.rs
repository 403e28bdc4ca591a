//! Application state shared across handlers

use std::sync::Arc;
use std::time::Instant;

use rankctl_core::RankIndex;

use crate::churn::ChurnPolicy;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    index: Arc<RankIndex>,
    churn: ChurnPolicy,
    started_at: Instant,
}

impl AppState {
    pub fn new(index: Arc<RankIndex>, churn: ChurnPolicy) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                index,
                churn,
                started_at: Instant::now(),
            }),
        }
    }

    pub fn index(&self) -> &Arc<RankIndex> {
        &self.inner.index
    }

    pub fn churn_policy(&self) -> ChurnPolicy {
        self.inner.churn
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}
