use serde::Serialize;
use crate::models::Pool;
use crate::models::format::{format_apy, format_tvl};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolStats<'a> {
    pub total_tvl: f64,
    pub average_apy: f64,
    pub top_apy: f64,
    pub top_apy_pool: Option<&'a Pool>,
    pub pools_with_apy: usize,
}

impl PoolStats<'_> {
    pub fn display(&self) -> StatsDisplay {
        StatsDisplay {
            total_tvl: format_tvl(Some(self.total_tvl)),
            average_apy: format_apy(Some(self.average_apy)),
            top_apy: format_apy(Some(self.top_apy)),
            top_apy_label: self
                .top_apy_pool
                .map(|p| format!("{} - {}", p.project, p.symbol)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsDisplay {
    pub total_tvl: String,
    pub average_apy: String,
    pub top_apy: String,
    pub top_apy_label: Option<String>,
}

/// Headline numbers over the full, unfiltered dataset.
pub fn summarize(pools: &[Pool]) -> PoolStats<'_> {
    let total_tvl: f64 = pools.iter().map(|p| p.tvl_usd.unwrap_or(0.0)).sum();

    let apys: Vec<f64> = pools.iter().filter_map(|p| p.apy).collect();
    if apys.is_empty() {
        return PoolStats {
            total_tvl,
            average_apy: 0.0,
            top_apy: 0.0,
            top_apy_pool: None,
            pools_with_apy: 0,
        };
    }

    let average_apy = apys.iter().sum::<f64>() / apys.len() as f64;
    let top_apy = apys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // exact match against the max, first occurrence wins
    let top_apy_pool = pools.iter().find(|p| p.apy == Some(top_apy));

    PoolStats {
        total_tvl,
        average_apy,
        top_apy,
        top_apy_pool,
        pools_with_apy: apys.len(),
    }
}
