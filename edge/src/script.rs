//! Analytics script caching.
//!
//! DESIGN
//! ======
//! The upstream tracking script changes rarely, so it is fetched once and
//! served from memory for 24 hours. A stale cache entry is replaced on the
//! next request; a fetch failure while the cache is empty maps to 502.

use std::time::{Duration, Instant};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::forward::ForwardError;
use crate::state::{AppState, CachedScript};

/// How long a fetched script stays valid, mirrored in `cache-control`.
pub const SCRIPT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Whether a cache entry fetched at `fetched_at` is still valid at `now`.
#[must_use]
pub fn is_fresh(fetched_at: Instant, now: Instant, max_age: Duration) -> bool {
    now.duration_since(fetched_at) < max_age
}

/// Serve `/js/script.js` from cache, refetching when stale.
pub async fn serve_script(State(state): State<AppState>) -> Result<Response, ForwardError> {
    if let Some(cached) = state.script_cache.read().await.as_ref() {
        if is_fresh(cached.fetched_at, Instant::now(), SCRIPT_MAX_AGE) {
            return Ok(script_response(cached.body.clone()));
        }
    }

    let upstream_response = state
        .client
        .get(format!("{}/js/script.js", state.upstream))
        .send()
        .await?
        .error_for_status()?;
    let body = upstream_response.bytes().await?;

    *state.script_cache.write().await = Some(CachedScript {
        body: body.clone(),
        fetched_at: Instant::now(),
    });

    Ok(script_response(body))
}

fn script_response(body: Bytes) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;
