//! API Handlers
//!
//! HTTP request handlers for each menu cache endpoint. The two menu handlers
//! are thin wrappers over the one [`MenuCacheService::lookup`] operation,
//! differing only in whether the dual-day prefetch is requested.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::MenuStore;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, MenuQuery, StatsResponse};
use crate::service::MenuCacheService;
use crate::upstream::MenuApiClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The read-through cache service
    pub service: MenuCacheService,
    /// Thread-safe cache store, shared with the service and the sweep task
    pub cache: Arc<RwLock<MenuStore>>,
}

impl AppState {
    /// Creates a new AppState over the given store and upstream client.
    pub fn new(cache: Arc<RwLock<MenuStore>>, upstream: MenuApiClient) -> Self {
        Self {
            service: MenuCacheService::new(cache.clone(), upstream),
            cache,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = Arc::new(RwLock::new(MenuStore::new()));
        Self::new(cache, MenuApiClient::from_config(config))
    }
}

/// Handler for GET /menu
///
/// Resolves the requested day and opportunistically warms the other day's
/// cache entry in the same call.
pub async fn menu_handler(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Value>> {
    let request = query.into_lookup()?;
    let payload = state.service.lookup(&request, true).await?;

    Ok(Json(payload))
}

/// Handler for GET /menu/single
///
/// Resolves only the requested day's slot, without prefetching the other.
pub async fn menu_single_handler(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Value>> {
    let request = query.into_lookup()?;
    let payload = state.service.lookup(&request, false).await?;

    Ok(Json(payload))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(stats.hits, stats.misses, stats.total_entries))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
