use std::collections::BTreeSet;
use crate::models::{Pool, QueryState};

/// Search + platform + chain predicate built from one query state.
#[derive(Clone)]
pub struct PoolFilter {
    search: Option<String>,
    platforms: BTreeSet<String>,
    chains: BTreeSet<String>,
}

impl PoolFilter {
    pub fn new(state: &QueryState) -> Self {
        let term = state.search_term();
        Self {
            search: (!term.is_empty()).then(|| term.to_lowercase()),
            platforms: state.platform_filters().clone(),
            chains: state.chain_filters().clone(),
        }
    }

    /// Case-insensitive substring match on project, symbol or chain.
    pub fn matches_search(&self, pool: &Pool) -> bool {
        let Some(term) = &self.search else {
            return true;
        };
        pool.project.to_lowercase().contains(term.as_str())
            || pool.symbol.to_lowercase().contains(term.as_str())
            || pool.chain.to_lowercase().contains(term.as_str())
    }

    /// Empty allow-list means no restriction.
    pub fn matches_platform(&self, pool: &Pool) -> bool {
        self.platforms.is_empty() || self.platforms.contains(&pool.project)
    }

    pub fn matches_chain(&self, pool: &Pool) -> bool {
        self.chains.is_empty() || self.chains.contains(&pool.chain_key())
    }

    pub fn is_match(&self, pool: &Pool) -> bool {
        let matched = self.matches_search(pool)
            && self.matches_platform(pool)
            && self.matches_chain(pool);
        if !matched {
            tracing::trace!("filtered out {} ({} on {})", pool.pool, pool.project, pool.chain);
        }
        matched
    }

    pub fn apply<'a>(&self, pools: &'a [Pool]) -> Vec<&'a Pool> {
        pools.iter().filter(|p| self.is_match(p)).collect()
    }
}
