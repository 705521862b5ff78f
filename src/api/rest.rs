use axum::{
    extract::{FromRequestParts, Path, Query, State},
    http::{header, request::Parts, HeaderName, StatusCode},
    response::{IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use crate::auth::{Authenticator, UserId};
use crate::config::Config;
use crate::error::Result;
use crate::models::format::{format_apy, format_tvl};
use crate::models::{ChainInfo, Pool, QueryState, QuickFilter, SortColumn, SortDirection};
use crate::services::{
    export, facets, registry, Facets, route_toggle, summarize, LoadOutcome, LocalStorage, PoolCache,
    PoolCollector, PoolPipeline, ToggleRoute, WatchlistStore,
};
use crate::sources::PoolSource;
use super::error::AppError;

pub struct AppState {
    pub collector: Arc<PoolCollector>,
    pub cache: Arc<PoolCache>,
    pub pipeline: PoolPipeline,
    pub watchlist: Arc<WatchlistStore>,
    pub auth: Arc<Authenticator>,
}

impl AppState {
    pub fn new(config: &Config, source: Arc<dyn PoolSource>) -> Result<Self> {
        let cache = Arc::new(PoolCache::new());
        let collector = Arc::new(PoolCollector::new(source, cache.clone()));

        let watchlist = if config.storage.enabled {
            let storage = LocalStorage::new(&config.storage.data_dir)?;
            WatchlistStore::with_persistence(Arc::new(storage))?
        } else {
            WatchlistStore::in_memory()
        };

        Ok(Self {
            collector,
            cache,
            pipeline: PoolPipeline::new(config.dashboard.page_size),
            watchlist: Arc::new(watchlist),
            auth: Arc::new(Authenticator::new(&config.auth)),
        })
    }

    fn sign_in(&self) -> Response {
        Redirect::to(self.auth.sign_in_path()).into_response()
    }
}

/// Signed-in user, if the request carries a valid bearer token.
pub struct CurrentUser(pub Option<UserId>);

#[axum::async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> std::result::Result<Self, Self::Rejection> {
        let authorization = parts.headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        Ok(CurrentUser(state.auth.authenticate(authorization)))
    }
}

/// `?search=eth&platforms=lido,aave-v3&chains=ethereum&sort=tvlUsd&dir=asc&page=2`
///
/// `quick=stablecoins|eth|btc` toggles a preset over `search`.
#[derive(Debug, Default, Deserialize)]
pub struct PoolQueryParams {
    pub search: Option<String>,
    pub quick: Option<QuickFilter>,
    pub platforms: Option<String>,
    pub chains: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<SortDirection>,
    pub page: Option<usize>,
}

fn split_list(raw: &Option<String>) -> Vec<&str> {
    raw.as_deref()
        .map(|s| s.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

impl PoolQueryParams {
    /// Query state on page 1. The requested page is applied once the page
    /// count is known.
    pub fn to_state(&self) -> std::result::Result<QueryState, AppError> {
        let mut state = QueryState::default()
            .with_search(self.search.clone().unwrap_or_default())
            .with_platforms(split_list(&self.platforms))
            .with_chains(split_list(&self.chains));
        if let Some(quick) = self.quick {
            state = state.toggle_quick_filter(quick);
        }

        let column = match self.sort.as_deref() {
            Some(name) => SortColumn::from_wire(name)
                .ok_or_else(|| AppError::bad_request(format!("Unknown sort column: {}", name)))?,
            None => state.sort_column(),
        };
        let direction = self.dir.unwrap_or(SortDirection::Desc);
        if column != state.sort_column() || direction != state.sort_direction() {
            state = state.with_sort(column, direction);
        }
        Ok(state)
    }
}

#[derive(Serialize)]
pub struct PoolRow<'a> {
    #[serde(flatten)]
    pub pool: &'a Pool,
    pub chain_info: ChainInfo,
    pub apy_display: String,
    pub tvl_display: String,
    pub in_watchlist: bool,
}

impl<'a> PoolRow<'a> {
    fn new(pool: &'a Pool, in_watchlist: bool) -> Self {
        Self {
            pool,
            chain_info: registry::lookup(&pool.chain_key()),
            apy_display: format_apy(pool.apy),
            tvl_display: format_tvl(pool.tvl_usd),
            in_watchlist,
        }
    }
}

fn rows<'a>(pools: &[&'a Pool], state: &AppState, user: Option<&UserId>) -> Vec<PoolRow<'a>> {
    pools.iter()
        .map(|pool| {
            // watchlist is never consulted for anonymous callers
            let starred = user.is_some_and(|u| state.watchlist.is_member(u, &pool.pool));
            PoolRow::new(pool, starred)
        })
        .collect()
}

/// GET /health
async fn health() -> &'static str {
    "OK"
}

/// GET /pools - one page of the filtered, sorted list
pub async fn list_pools(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<PoolQueryParams>,
) -> std::result::Result<Json<serde_json::Value>, AppError> {
    let snapshot = state.cache.snapshot()?;
    let query = params.to_state()?;

    let sorted = state.pipeline.filter_and_sort(&snapshot.pools, &query);
    let total_pages = state.pipeline.total_pages(sorted.len());
    let query = match params.page {
        Some(page) => query.go_to_page(page, total_pages),
        None => query,
    };
    let page = state.pipeline.paginate(sorted, query.current_page());

    Ok(Json(serde_json::json!({
        "query": query,
        "items": rows(&page.items, &state, user.as_ref()),
        "total_count": page.total_count,
        "total_pages": page.total_pages,
        "page": page.page,
        "page_size": state.pipeline.page_size(),
    })))
}

/// GET /pools/facets
async fn pool_facets(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<Json<Facets>, AppError> {
    let snapshot = state.cache.snapshot()?;
    Ok(Json(facets(&snapshot.pools)))
}

/// GET /pools/export - CSV of the filtered, sorted list (all pages)
pub async fn export_pools(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PoolQueryParams>,
) -> std::result::Result<Response, AppError> {
    let snapshot = state.cache.snapshot()?;
    let query = params.to_state()?;
    let sorted = state.pipeline.filter_and_sort(&snapshot.pools, &query);
    let body = export::to_csv(sorted);

    let headers: [(HeaderName, String); 2] = [
        (header::CONTENT_TYPE, export::CSV_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export::CSV_FILENAME),
        ),
    ];
    Ok((headers, body).into_response())
}

/// POST /pools/reload
pub async fn reload_pools(State(state): State<Arc<AppState>>) -> Response {
    let outcome = state.collector.reload().await;
    let status = match &outcome {
        LoadOutcome::Failed { .. } => StatusCode::BAD_GATEWAY,
        LoadOutcome::Applied { .. } | LoadOutcome::Stale { .. } => StatusCode::OK,
    };
    (status, Json(outcome)).into_response()
}

/// GET /stats - headline numbers over the full dataset
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<Json<serde_json::Value>, AppError> {
    let snapshot = state.cache.snapshot()?;
    let stats = summarize(&snapshot.pools);

    Ok(Json(serde_json::json!({
        "stats": stats,
        "display": stats.display(),
        "pools": snapshot.pools.len(),
        "loaded_at": snapshot.loaded_at,
        "load_sequence": snapshot.sequence,
        "duplicate_pool_ids": snapshot.duplicate_ids,
        "source": state.collector.source_name(),
        "collector": state.collector.get_stats().counts(),
    })))
}

/// GET /chains/:id
async fn get_chain(Path(chain_id): Path<String>) -> Json<serde_json::Value> {
    let entry = registry::resolve(&chain_id);
    Json(serde_json::json!({
        "known": entry.is_known(),
        "chain": entry.info(),
    }))
}

/// GET /watchlist - the caller's saved pools in dataset order
pub async fn get_watchlist(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> std::result::Result<Response, AppError> {
    let Some(user) = user else {
        return Ok(state.sign_in());
    };

    let snapshot = state.cache.snapshot()?;
    let items = state.watchlist.view(&user, &snapshot.pools);

    Ok(Json(serde_json::json!({
        "user": user,
        "count": items.len(),
        "items": rows(&items, &state, Some(&user)),
    }))
    .into_response())
}

/// POST /watchlist/:pool/toggle
pub async fn toggle_watchlist(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(pool_id): Path<String>,
) -> std::result::Result<Response, AppError> {
    match route_toggle(user.as_ref()) {
        ToggleRoute::SignIn => Ok(state.sign_in()),
        ToggleRoute::Toggle(user) => {
            let in_watchlist = state.watchlist.toggle(user, &pool_id)?;
            Ok(Json(serde_json::json!({
                "pool": pool_id,
                "in_watchlist": in_watchlist,
            }))
            .into_response())
        }
    }
}

pub fn create_rest_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/pools", get(list_pools))
        .route("/pools/facets", get(pool_facets))
        .route("/pools/export", get(export_pools))
        .route("/pools/reload", post(reload_pools))
        .route("/stats", get(get_stats))
        .route("/chains/:id", get(get_chain))
        .route("/watchlist", get(get_watchlist))
        .route("/watchlist/:pool/toggle", post(toggle_watchlist))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
