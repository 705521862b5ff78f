use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::error::{DashboardError, Result};
use crate::models::Pool;
use crate::sources::SourceError;

/// One successfully loaded dataset.
#[derive(Debug)]
pub struct Snapshot {
    pub pools: Vec<Pool>,
    pub loaded_at: DateTime<Utc>,
    pub sequence: u64,
    /// Pool ids that appear more than once in the payload.
    pub duplicate_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(Arc<Snapshot>),
    Failed { message: String, failed_at: DateTime<Utc> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
    Applied { sequence: u64, pools: usize },
    Failed { sequence: u64, message: String },
    /// A newer load already landed before this one finished.
    Stale { sequence: u64, latest: u64 },
}

/// Holds the resident dataset. Loads are sequenced: a result lands only when
/// no newer load has landed yet, so an abandoned newer load never blocks an
/// older one.
pub struct PoolCache {
    state: RwLock<LoadState>,
    issued: AtomicU64,
    /// Highest sequence that changed the state. Only written under `state`.
    settled: AtomicU64,
}

impl PoolCache {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LoadState::Loading),
            issued: AtomicU64::new(0),
            settled: AtomicU64::new(0),
        }
    }

    /// Reserves the next sequence number for a load about to start.
    pub fn begin_load(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn latest_settled(&self) -> u64 {
        self.settled.load(Ordering::SeqCst)
    }

    pub fn complete_load(
        &self,
        sequence: u64,
        result: std::result::Result<Vec<Pool>, SourceError>,
    ) -> LoadOutcome {
        let mut state = self.state.write();

        let latest = self.latest_settled();
        if sequence <= latest {
            tracing::debug!("Discarding stale load #{} (latest #{})", sequence, latest);
            return LoadOutcome::Stale { sequence, latest };
        }
        self.settled.store(sequence, Ordering::SeqCst);

        match result {
            Ok(pools) => {
                let duplicate_ids = find_duplicate_ids(&pools);
                if !duplicate_ids.is_empty() {
                    tracing::warn!(
                        "Load #{} has {} duplicated pool ids, watchlist rows may be ambiguous",
                        sequence,
                        duplicate_ids.len()
                    );
                }
                let count = pools.len();
                *state = LoadState::Ready(Arc::new(Snapshot {
                    pools,
                    loaded_at: Utc::now(),
                    sequence,
                    duplicate_ids,
                }));
                LoadOutcome::Applied { sequence, pools: count }
            }
            Err(e) => {
                // prior dataset is dropped, never served stale
                let message = e.to_string();
                *state = LoadState::Failed {
                    message: message.clone(),
                    failed_at: Utc::now(),
                };
                LoadOutcome::Failed { sequence, message }
            }
        }
    }

    pub fn state(&self) -> LoadState {
        self.state.read().clone()
    }

    pub fn snapshot(&self) -> Result<Arc<Snapshot>> {
        match &*self.state.read() {
            LoadState::Ready(snapshot) => Ok(snapshot.clone()),
            LoadState::Loading => Err(DashboardError::Unavailable(
                "pool data is still loading".to_string(),
            )),
            LoadState::Failed { message, .. } => Err(DashboardError::Unavailable(format!(
                "Failed to load data: {}",
                message
            ))),
        }
    }

    pub fn len(&self) -> usize {
        match &*self.state.read() {
            LoadState::Ready(snapshot) => snapshot.pools.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PoolCache {
    fn default() -> Self {
        Self::new()
    }
}

fn find_duplicate_ids(pools: &[Pool]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(pools.len());
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for pool in pools {
        let id = pool.pool.as_str();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(pool.pool.clone());
        }
    }
    duplicates
}
