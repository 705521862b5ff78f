use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Pool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    #[serde(rename = "project")]
    Project,
    #[serde(rename = "chain")]
    Chain,
    #[serde(rename = "symbol")]
    Symbol,
    #[serde(rename = "pool")]
    Pool,
    #[serde(rename = "tvlUsd")]
    TvlUsd,
    #[serde(rename = "apy")]
    Apy,
    #[serde(rename = "apyBase")]
    ApyBase,
    #[serde(rename = "apyReward")]
    ApyReward,
    #[serde(rename = "apyPct7D")]
    ApyPct7D,
    #[serde(rename = "apyMean30d")]
    ApyMean30d,
}

/// Typed view of one pool's value for a sort column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Number(Option<f64>),
    Text(Option<&'a str>),
}

impl SortKey<'_> {
    pub fn is_missing(&self) -> bool {
        matches!(self, SortKey::Number(None) | SortKey::Text(None))
    }
}

impl SortColumn {
    pub const ALL: [SortColumn; 10] = [
        SortColumn::Project,
        SortColumn::Chain,
        SortColumn::Symbol,
        SortColumn::Pool,
        SortColumn::TvlUsd,
        SortColumn::Apy,
        SortColumn::ApyBase,
        SortColumn::ApyReward,
        SortColumn::ApyPct7D,
        SortColumn::ApyMean30d,
    ];

    pub fn key<'a>(&self, pool: &'a Pool) -> SortKey<'a> {
        match self {
            SortColumn::Project => SortKey::Text(Some(&pool.project)),
            SortColumn::Chain => SortKey::Text(Some(&pool.chain)),
            SortColumn::Symbol => SortKey::Text(Some(&pool.symbol)),
            SortColumn::Pool => SortKey::Text(Some(&pool.pool)),
            SortColumn::TvlUsd => SortKey::Number(pool.tvl_usd),
            SortColumn::Apy => SortKey::Number(pool.apy),
            SortColumn::ApyBase => SortKey::Number(pool.apy_base),
            SortColumn::ApyReward => SortKey::Number(pool.apy_reward),
            SortColumn::ApyPct7D => SortKey::Number(pool.apy_pct_7d),
            SortColumn::ApyMean30d => SortKey::Number(pool.apy_mean_30d),
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            SortColumn::Project => "project",
            SortColumn::Chain => "chain",
            SortColumn::Symbol => "symbol",
            SortColumn::Pool => "pool",
            SortColumn::TvlUsd => "tvlUsd",
            SortColumn::Apy => "apy",
            SortColumn::ApyBase => "apyBase",
            SortColumn::ApyReward => "apyReward",
            SortColumn::ApyPct7D => "apyPct7D",
            SortColumn::ApyMean30d => "apyMean30d",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.wire_name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Preset searches offered next to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickFilter {
    Stablecoins,
    Eth,
    Btc,
}

impl QuickFilter {
    pub fn term(&self) -> &'static str {
        match self {
            QuickFilter::Stablecoins => "USD",
            QuickFilter::Eth => "ETH",
            QuickFilter::Btc => "BTC",
        }
    }

    /// Whether the preset is currently applied to `search_term`.
    pub fn is_active(&self, search_term: &str) -> bool {
        match self {
            QuickFilter::Stablecoins => search_term.contains(self.term()),
            QuickFilter::Eth | QuickFilter::Btc => search_term == self.term(),
        }
    }
}

/// Immutable dashboard query. Every transition returns a new state, and every
/// transition other than a page change lands on page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    search_term: String,
    platform_filters: BTreeSet<String>,
    chain_filters: BTreeSet<String>,
    sort_column: SortColumn,
    sort_direction: SortDirection,
    current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            platform_filters: BTreeSet::new(),
            chain_filters: BTreeSet::new(),
            sort_column: SortColumn::Apy,
            sort_direction: SortDirection::Desc,
            current_page: 1,
        }
    }
}

impl QueryState {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn platform_filters(&self) -> &BTreeSet<String> {
        &self.platform_filters
    }

    pub fn chain_filters(&self) -> &BTreeSet<String> {
        &self.chain_filters
    }

    pub fn sort_column(&self) -> SortColumn {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    fn first_page(mut self) -> Self {
        self.current_page = 1;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self.first_page()
    }

    pub fn toggle_quick_filter(self, quick: QuickFilter) -> Self {
        let next = if quick.is_active(&self.search_term) {
            String::new()
        } else {
            quick.term().to_string()
        };
        self.with_search(next)
    }

    pub fn toggle_platform(mut self, platform: &str) -> Self {
        if !self.platform_filters.remove(platform) {
            self.platform_filters.insert(platform.to_string());
        }
        self.first_page()
    }

    pub fn toggle_chain(mut self, chain: &str) -> Self {
        let chain = chain.to_lowercase();
        if !self.chain_filters.remove(&chain) {
            self.chain_filters.insert(chain);
        }
        self.first_page()
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platform_filters = platforms.into_iter().map(Into::into).collect();
        self.first_page()
    }

    pub fn with_chains<I, S>(mut self, chains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.chain_filters = chains
            .into_iter()
            .map(|c| c.as_ref().to_lowercase())
            .collect();
        self.first_page()
    }

    /// Column header click: flip direction on the active column, otherwise
    /// switch columns and start descending.
    pub fn sort_by(mut self, column: SortColumn) -> Self {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Desc;
        }
        self.first_page()
    }

    pub fn with_sort(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.sort_column = column;
        self.sort_direction = direction;
        self.first_page()
    }

    /// Requests outside `1..=total_pages` leave the state untouched.
    pub fn go_to_page(mut self, page: usize, total_pages: usize) -> Self {
        if page >= 1 && page <= total_pages {
            self.current_page = page;
        }
        self
    }
}
