use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use dashmap::DashMap;
use parking_lot::Mutex;
use crate::auth::UserId;
use crate::error::Result;
use crate::models::Pool;
use super::storage::{WatchlistMap, WatchlistPersistence};

/// Where a star click should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRoute<'a> {
    Toggle(&'a UserId),
    SignIn,
}

/// Unauthenticated toggles never reach the store.
pub fn route_toggle(user: Option<&UserId>) -> ToggleRoute<'_> {
    match user {
        Some(user) => ToggleRoute::Toggle(user),
        None => ToggleRoute::SignIn,
    }
}

/// Per-user pool id sets.
pub struct WatchlistStore {
    entries: DashMap<UserId, HashSet<String>>,
    persistence: Option<Arc<dyn WatchlistPersistence>>,
    save_lock: Mutex<()>,
}

impl WatchlistStore {
    pub fn in_memory() -> Self {
        Self {
            entries: DashMap::new(),
            persistence: None,
            save_lock: Mutex::new(()),
        }
    }

    /// Restores every saved watchlist from `persistence`.
    pub fn with_persistence(persistence: Arc<dyn WatchlistPersistence>) -> Result<Self> {
        let entries = DashMap::new();
        for (user, pools) in persistence.load_all()? {
            entries.insert(UserId::new(user), pools.into_iter().collect());
        }
        tracing::info!("✓ Watchlists restored for {} users", entries.len());

        Ok(Self {
            entries,
            persistence: Some(persistence),
            save_lock: Mutex::new(()),
        })
    }

    pub fn is_member(&self, user: &UserId, pool_id: &str) -> bool {
        self.entries
            .get(user)
            .map(|set| set.contains(pool_id))
            .unwrap_or(false)
    }

    /// Adds when absent, removes when present. Returns the new membership.
    ///
    /// The in-memory flip stands even if persisting it fails.
    pub fn toggle(&self, user: &UserId, pool_id: &str) -> Result<bool> {
        let member = {
            let mut set = self.entries.entry(user.clone()).or_default();
            if set.remove(pool_id) {
                false
            } else {
                set.insert(pool_id.to_string());
                true
            }
        };
        tracing::debug!("{} {} {}'s watchlist",
            if member { "Added" } else { "Removed" }, pool_id, user);

        self.persist()?;
        Ok(member)
    }

    pub fn members(&self, user: &UserId) -> BTreeSet<String> {
        self.entries
            .get(user)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self, user: &UserId) -> usize {
        self.entries.get(user).map(|set| set.len()).unwrap_or(0)
    }

    /// Pools on the user's watchlist, in dataset order.
    pub fn view<'a>(&self, user: &UserId, pools: &'a [Pool]) -> Vec<&'a Pool> {
        let Some(set) = self.entries.get(user) else {
            return Vec::new();
        };
        pools.iter().filter(|p| set.contains(&p.pool)).collect()
    }

    fn persist(&self) -> Result<()> {
        let Some(persistence) = &self.persistence else {
            return Ok(());
        };

        // snapshot under the lock so the last writer saves the latest state
        let _guard = self.save_lock.lock();
        let snapshot: WatchlistMap = self.entries
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| {
                (entry.key().as_str().to_string(), entry.value().iter().cloned().collect())
            })
            .collect();
        persistence.save_all(&snapshot)
    }
}
