use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use serde::Serialize;
use crate::sources::PoolSource;
use super::cache::{LoadOutcome, PoolCache};

#[derive(Debug, Default)]
pub struct CollectorStats {
    pub total_requests: AtomicU64,
    pub successful: AtomicU64,
    pub failed: AtomicU64,
    pub stale: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectorCounts {
    pub total_requests: u64,
    pub successful: u64,
    pub failed: u64,
    pub stale: u64,
}

impl CollectorStats {
    pub fn counts(&self) -> CollectorCounts {
        CollectorCounts {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful: self.successful.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            stale: self.stale.load(Ordering::Relaxed),
        }
    }
}

/// Pulls the full pool list from the source into the cache.
pub struct PoolCollector {
    source: Arc<dyn PoolSource>,
    cache: Arc<PoolCache>,
    stats: CollectorStats,
}

impl PoolCollector {
    pub fn new(source: Arc<dyn PoolSource>, cache: Arc<PoolCache>) -> Self {
        Self {
            source,
            cache,
            stats: CollectorStats::default(),
        }
    }

    pub async fn reload(&self) -> LoadOutcome {
        let sequence = self.cache.begin_load();
        self.stats.total_requests.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Load #{} from {} started", sequence, self.source.name());

        let result = self.source.fetch_pools().await;
        let outcome = self.cache.complete_load(sequence, result);

        match &outcome {
            LoadOutcome::Applied { pools, .. } => {
                self.stats.successful.fetch_add(1, Ordering::Relaxed);
                tracing::info!("✓ Load #{} complete: {} pools from {}", sequence, pools, self.source.name());
            }
            LoadOutcome::Failed { message, .. } => {
                self.stats.failed.fetch_add(1, Ordering::Relaxed);
                tracing::warn!("Load #{} from {} failed: {}", sequence, self.source.name(), message);
            }
            LoadOutcome::Stale { .. } => {
                self.stats.stale.fetch_add(1, Ordering::Relaxed);
            }
        }

        outcome
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn get_stats(&self) -> &CollectorStats {
        &self.stats
    }
}
