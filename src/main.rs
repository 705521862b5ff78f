use std::path::PathBuf;
use std::sync::Arc;
use clap::Parser;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yield_dashboard::api::{create_rest_router, AppState};
use yield_dashboard::config::Config;
use yield_dashboard::models::format::{format_apy, format_tvl};
use yield_dashboard::services::{summarize, LoadOutcome};
use yield_dashboard::sources::{DefiLlamaSource, PoolSource};

#[derive(Debug, Parser)]
#[command(name = "yield-dashboard", about = "DeFi yield pool dashboard server")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Fetch once, print the headline stats and exit
    #[arg(long)]
    check: bool,
}

/// One-shot fetch for checking the upstream source.
async fn run_check(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n🔍 Fetching from {} ...", state.collector.source_name());

    match state.collector.reload().await {
        LoadOutcome::Applied { pools, .. } => println!("✅ {} pools", pools),
        LoadOutcome::Failed { message, .. } => {
            println!("❌ {}", message);
            return Err(message.into());
        }
        LoadOutcome::Stale { .. } => return Err("load superseded".into()),
    }

    let snapshot = state.cache.snapshot()?;
    let stats = summarize(&snapshot.pools);
    println!("   Total TVL:   {}", format_tvl(Some(stats.total_tvl)));
    println!("   Average APY: {}", format_apy(Some(stats.average_apy)));
    match stats.top_apy_pool {
        Some(pool) => println!("   Top APY:     {} ({} - {})",
            format_apy(Some(stats.top_apy)), pool.project, pool.symbol),
        None => println!("   Top APY:     {}", format_apy(Some(stats.top_apy))),
    }
    if !snapshot.duplicate_ids.is_empty() {
        println!("   ⚠️  {} duplicated pool ids", snapshot.duplicate_ids.len());
    }
    Ok(())
}

#[tokio::main(worker_threads = 4)]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,yield_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = if cli.config.exists() {
        let config = Config::load(&cli.config)?;
        tracing::info!("✓ Configuration loaded from {}", cli.config.display());
        config
    } else {
        tracing::warn!("{} not found, using defaults", cli.config.display());
        Config::default()
    };

    let source: Arc<dyn PoolSource> = Arc::new(DefiLlamaSource::new(&config.source)?);
    let state = Arc::new(AppState::new(&config, source)?);

    if cli.check {
        return run_check(&state).await;
    }

    println!("\n🚀 Yield Dashboard Starting...\n");

    // Initial load runs in the background; data endpoints answer 503 until it lands
    let collector = state.collector.clone();
    let refresh_secs = config.source.refresh_secs;
    tokio::spawn(async move {
        if refresh_secs == 0 {
            collector.reload().await;
            return;
        }

        let mut ticker = interval(Duration::from_secs(refresh_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            collector.reload().await;
        }
    });

    let app = create_rest_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    println!("\n✓ Server ready on http://{}\n", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
