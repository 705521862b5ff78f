//! DeFi yield dashboard backend: pool data from an aggregator, served with
//! search, filters, sorting, pagination, CSV export and per-user watchlists.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod sources;

pub use error::{DashboardError, Result};
