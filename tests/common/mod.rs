//! Shared fixtures for the yield dashboard integration tests.
//!
//! `sample_pools()` is a small mixed dataset. `ScriptedSource` is a
//! `PoolSource` that replays queued responses, optionally after a delay.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use yield_dashboard::models::Pool;
use yield_dashboard::sources::{PoolSource, SourceError};

pub fn pool(id: &str, project: &str, chain: &str, symbol: &str, apy: Option<f64>) -> Pool {
    Pool::new(chain, project, symbol, id).with_apy(apy)
}

/// Eight pools across four chains and five projects, with a null APY and a
/// null TVL mixed in.
pub fn sample_pools() -> Vec<Pool> {
    vec![
        pool("p1", "aave-v3", "Ethereum", "USDC", Some(4.2)).with_tvl(Some(1_000_000.0)),
        pool("p2", "lido", "Ethereum", "STETH", Some(3.1)).with_tvl(Some(5_000_000.0)),
        pool("p3", "aave-v3", "Arbitrum", "WETH", Some(1.9)).with_tvl(Some(250_000.0)),
        pool("p4", "gmx", "Arbitrum", "GLP", Some(18.5)).with_tvl(Some(90_000.0)),
        pool("p5", "raydium", "Solana", "SOL-USDC", None).with_tvl(Some(40_000.0)),
        pool("p6", "curve-dex", "Ethereum", "DAI-USDC-USDT", Some(2.4)).with_tvl(None),
        pool("p7", "aave-v3", "Base", "cbBTC", Some(0.8)).with_tvl(Some(310_000.0)),
        pool("p8", "Aerodrome-V1", "Base", "WETH-USDC", Some(18.5)).with_tvl(Some(75_000.0)),
    ]
}

/// `count` pools with distinct APYs `1.0..=count`, shuffled by a fixed
/// stride so input order differs from APY order.
pub fn numbered_pools(count: usize) -> Vec<Pool> {
    (0..count)
        .map(|i| {
            let rank = (i * 7) % count + 1;
            pool(
                &format!("pool-{:02}", i),
                "proto",
                "Ethereum",
                &format!("TKN{}", i),
                Some(rank as f64),
            )
        })
        .collect()
}

pub fn ids(pools: &[&Pool]) -> Vec<String> {
    pools.iter().map(|p| p.pool.clone()).collect()
}

pub struct ScriptedSource {
    responses: Mutex<VecDeque<(Duration, Result<Vec<Pool>, SourceError>)>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
        }
    }

    pub fn then_ok(self, pools: Vec<Pool>) -> Self {
        self.then_after(Duration::ZERO, Ok(pools))
    }

    pub fn then_err(self, err: SourceError) -> Self {
        self.then_after(Duration::ZERO, Err(err))
    }

    pub fn then_after(self, delay: Duration, result: Result<Vec<Pool>, SourceError>) -> Self {
        self.responses.lock().push_back((delay, result));
        self
    }
}

#[async_trait]
impl PoolSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "Scripted"
    }

    async fn fetch_pools(&self) -> Result<Vec<Pool>, SourceError> {
        let next = self.responses.lock().pop_front();
        match next {
            Some((delay, result)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Err(SourceError::Network("no scripted response left".to_string())),
        }
    }
}
