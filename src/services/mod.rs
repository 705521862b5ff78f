pub mod cache;
pub mod collector;
pub mod export;
pub mod filter;
pub mod pipeline;
pub mod registry;
pub mod sort;
pub mod stats;
pub mod storage;
pub mod watchlist;

pub use cache::{LoadOutcome, LoadState, PoolCache, Snapshot};
pub use collector::PoolCollector;
pub use filter::PoolFilter;
pub use pipeline::{facets, Facets, PoolPage, PoolPipeline};
pub use stats::{summarize, PoolStats};
pub use storage::{LocalStorage, WatchlistPersistence};
pub use watchlist::{route_toggle, ToggleRoute, WatchlistStore};
