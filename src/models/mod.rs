pub mod chain;
pub mod format;
pub mod pool;
pub mod query;

pub use chain::{ChainEntry, ChainInfo};
pub use pool::Pool;
pub use query::{QueryState, QuickFilter, SortColumn, SortDirection, SortKey};
