use std::collections::HashSet;
use serde::Serialize;
use crate::models::{ChainInfo, Pool, QueryState};
use super::{registry, sort, PoolFilter};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolPage<'a> {
    pub items: Vec<&'a Pool>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Distinct filter choices in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facets {
    pub platforms: Vec<String>,
    pub chains: Vec<ChainFacet>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainFacet {
    pub key: String,
    #[serde(flatten)]
    pub info: ChainInfo,
}

/// Filter -> sort -> paginate over a resident pool list.
///
/// Callers own the page-reset rule: any change other than a page change must
/// go through a `QueryState` transition that lands on page 1.
#[derive(Debug, Clone, Copy)]
pub struct PoolPipeline {
    page_size: usize,
}

impl PoolPipeline {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Filtered and sorted but not paginated. This is what gets exported.
    pub fn filter_and_sort<'a>(&self, pools: &'a [Pool], state: &QueryState) -> Vec<&'a Pool> {
        let mut matched = PoolFilter::new(state).apply(pools);
        sort::sort_pools(&mut matched, state.sort_column(), state.sort_direction());
        matched
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size).max(1)
    }

    /// Slices one page. Out-of-range pages come back empty.
    pub fn paginate<'a>(&self, sorted: Vec<&'a Pool>, page: usize) -> PoolPage<'a> {
        let total_count = sorted.len();
        let start = page.saturating_sub(1).saturating_mul(self.page_size);
        let items = if page == 0 || start >= total_count {
            Vec::new()
        } else {
            let end = (start + self.page_size).min(total_count);
            sorted[start..end].to_vec()
        };

        PoolPage {
            items,
            total_count,
            total_pages: self.total_pages(total_count),
            page,
        }
    }

    pub fn apply<'a>(&self, pools: &'a [Pool], state: &QueryState) -> PoolPage<'a> {
        let sorted = self.filter_and_sort(pools, state);
        self.paginate(sorted, state.current_page())
    }
}

pub fn facets(pools: &[Pool]) -> Facets {
    let mut seen_platforms: HashSet<&str> = HashSet::new();
    let mut seen_chains: HashSet<String> = HashSet::new();
    let mut platforms = Vec::new();
    let mut chains = Vec::new();

    for pool in pools {
        if seen_platforms.insert(pool.project.as_str()) {
            platforms.push(pool.project.clone());
        }
        let key = pool.chain_key();
        if seen_chains.insert(key.clone()) {
            let info = registry::lookup(&key);
            chains.push(ChainFacet { key, info });
        }
    }

    Facets { platforms, chains }
}
