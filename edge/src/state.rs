//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds one reqwest client for all upstream calls, the upstream base
//! URL, and the cached analytics script.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use tokio::sync::RwLock;

/// Analytics script fetched from the upstream, with its fetch time for
/// freshness checks.
#[derive(Clone)]
pub struct CachedScript {
    pub body: Bytes,
    pub fetched_at: Instant,
}

#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    /// Upstream base URL without a trailing slash.
    pub upstream: String,
    pub script_cache: Arc<RwLock<Option<CachedScript>>>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream: upstream.trim_end_matches('/').to_owned(),
            script_cache: Arc::new(RwLock::new(None)),
        }
    }
}
