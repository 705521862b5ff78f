use serde::{Deserialize, Serialize};

/// One yield opportunity as reported by the aggregator.
///
/// Every numeric field is independently nullable: `None` means the value is
/// unavailable, not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub chain: String,
    pub project: String,
    pub symbol: String,
    /// Unique identifier, also the watchlist key.
    pub pool: String,
    #[serde(default)]
    pub tvl_usd: Option<f64>,
    #[serde(default)]
    pub apy: Option<f64>,
    #[serde(default)]
    pub apy_base: Option<f64>,
    #[serde(default)]
    pub apy_reward: Option<f64>,
    #[serde(default, rename = "apyPct1D")]
    pub apy_pct_1d: Option<f64>,
    #[serde(default, rename = "apyPct7D")]
    pub apy_pct_7d: Option<f64>,
    #[serde(default, rename = "apyPct30D")]
    pub apy_pct_30d: Option<f64>,
    #[serde(default)]
    pub apy_mean_30d: Option<f64>,
    #[serde(default)]
    pub stablecoin: Option<bool>,
    #[serde(default)]
    pub il_risk: Option<String>,
    #[serde(default)]
    pub pool_meta: Option<String>,
    #[serde(default)]
    pub exposure: Option<String>,
    #[serde(default)]
    pub reward_tokens: Option<Vec<String>>,
    #[serde(default)]
    pub underlying_tokens: Option<Vec<String>>,
    #[serde(default)]
    pub il7d: Option<f64>,
    #[serde(default)]
    pub apy_base_7d: Option<f64>,
    #[serde(default)]
    pub volume_usd_1d: Option<f64>,
    #[serde(default)]
    pub volume_usd_7d: Option<f64>,
    #[serde(default)]
    pub mu: Option<f64>,
    #[serde(default)]
    pub sigma: Option<f64>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub outlier: Option<bool>,
}

impl Pool {
    /// Minimal record with every optional field empty.
    pub fn new(
        chain: impl Into<String>,
        project: impl Into<String>,
        symbol: impl Into<String>,
        pool: impl Into<String>,
    ) -> Self {
        Self {
            chain: chain.into(),
            project: project.into(),
            symbol: symbol.into(),
            pool: pool.into(),
            tvl_usd: None,
            apy: None,
            apy_base: None,
            apy_reward: None,
            apy_pct_1d: None,
            apy_pct_7d: None,
            apy_pct_30d: None,
            apy_mean_30d: None,
            stablecoin: None,
            il_risk: None,
            pool_meta: None,
            exposure: None,
            reward_tokens: None,
            underlying_tokens: None,
            il7d: None,
            apy_base_7d: None,
            volume_usd_1d: None,
            volume_usd_7d: None,
            mu: None,
            sigma: None,
            count: None,
            outlier: None,
        }
    }

    pub fn with_apy(mut self, apy: Option<f64>) -> Self {
        self.apy = apy;
        self
    }

    pub fn with_tvl(mut self, tvl_usd: Option<f64>) -> Self {
        self.tvl_usd = tvl_usd;
        self
    }

    pub fn chain_key(&self) -> String {
        self.chain.to_lowercase()
    }
}
