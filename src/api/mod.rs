pub mod error;
pub mod rest;

pub use error::AppError;
pub use rest::{create_rest_router, AppState, CurrentUser, PoolQueryParams};
