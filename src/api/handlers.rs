//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::Result;
use crate::models::{DeleteResponse, HealthResponse, SetQuery, SetRequest, SetResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Contains the cache store wrapped in Arc<RwLock<>> for thread-safe
/// access. The store is constructed once at startup and injected here;
/// handlers hold no cache state of their own.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Propagates `CacheError::InvalidConfig` from store construction.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = CacheStore::new(config.default_ttl, config.capacity, config.eviction_policy)?;
        Ok(Self::new(cache))
    }
}

/// Handler for POST/PUT /object/:key
///
/// Stores the request body's `object` field under the key, with an
/// optional `ttl` query parameter overriding the default TTL.
pub async fn set_object_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SetQuery>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    let ttl = query.ttl_seconds()?;
    let value = req.object.unwrap_or(Value::Null);

    // Acquire write lock and set the value
    let mut cache = state.cache.write().await;
    cache.set(key.clone(), value, ttl)?;

    Ok(Json(SetResponse::new(key)))
}

/// Handler for GET /object/:key
///
/// Returns the stored value verbatim as the response body.
pub async fn get_object_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Value>> {
    // Write lock: an expired entry is removed as a side effect of the read
    let mut cache = state.cache.write().await;
    let value = cache.get(&key)?;

    Ok(Json(value))
}

/// Handler for DELETE /object/:key
pub async fn delete_object_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    // Acquire write lock
    let mut cache = state.cache.write().await;
    cache.delete(&key)?;

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
