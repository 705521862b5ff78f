use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use crate::config::SourceConfig;
use crate::models::Pool;
use super::{PoolSource, SourceError};

pub const DEFAULT_URL: &str = "https://yields.llama.fi/pools";

/// DeFiLlama yields API
pub struct DefiLlamaSource {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct YieldResponse {
    status: String,
    #[serde(default)]
    data: Option<Vec<Pool>>,
}

impl DefiLlamaSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

/// Unwraps the `{"status": "...", "data": [...]}` envelope.
fn parse_body(body: &[u8]) -> Result<Vec<Pool>, SourceError> {
    let parsed: YieldResponse = serde_json::from_slice(body)
        .map_err(|e| SourceError::Parse(e.to_string()))?;

    if parsed.status != "success" {
        return Err(SourceError::Rejected(parsed.status));
    }

    parsed.data
        .ok_or_else(|| SourceError::Parse("missing data array".to_string()))
}

#[async_trait]
impl PoolSource for DefiLlamaSource {
    fn name(&self) -> &'static str {
        "DefiLlama"
    }

    async fn fetch_pools(&self) -> Result<Vec<Pool>, SourceError> {
        let resp = self.client.get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if resp.status() == 429 {
            return Err(SourceError::RateLimit);
        }

        if !resp.status().is_success() {
            return Err(SourceError::Status(resp.status().as_u16()));
        }

        let body = resp.bytes()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let pools = parse_body(&body)?;
        tracing::debug!("{} returned {} pools", self.name(), pools.len());
        Ok(pools)
    }
}
