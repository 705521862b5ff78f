pub mod defillama;

use async_trait::async_trait;
use crate::models::Pool;

pub use defillama::DefiLlamaSource;

/// Upstream provider of the full pool list. Retry and caching policy belong
/// to the implementation, not to callers.
#[async_trait]
pub trait PoolSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch_pools(&self) -> Result<Vec<Pool>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Rate limited")]
    RateLimit,
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("Upstream rejected request: {0}")]
    Rejected(String),
}
