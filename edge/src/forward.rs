//! Event proxying.
//!
//! DESIGN
//! ======
//! `/api/event` is forwarded to the upstream with the request method,
//! headers, and body intact. Hop-by-hop headers are stripped, `Host` is
//! left for the HTTP client to rewrite from the upstream URL, and the
//! original client address is recorded in `X-Forwarded-For`. The upstream
//! status and body come back verbatim; any transport failure maps to 502.

use std::net::{IpAddr, SocketAddr};

use axum::body::{Body, Bytes};
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the analytics upstream.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The upstream request could not be completed.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "event forwarding failed");
        (StatusCode::BAD_GATEWAY, "bad gateway").into_response()
    }
}

// =============================================================================
// HEADER FILTERING
// =============================================================================

/// Hop-by-hop headers that must never cross a proxy (RFC 9110 §7.6.1).
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailers",
    "transfer-encoding",
    "upgrade",
];

/// Whether a request/response header may be copied across the proxy.
///
/// `host` is recomputed from the upstream URL and `content-length` from
/// the actual body, so both are dropped here.
#[must_use]
pub fn is_forwardable_header(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    !HOP_BY_HOP.contains(&name.as_str()) && name != "host" && name != "content-length"
}

fn filtered_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| is_forwardable_header(name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// `X-Forwarded-For` value for the proxied request: the client address
/// appended to any chain a previous proxy already recorded.
#[must_use]
pub fn forwarded_for(existing: Option<&str>, client_ip: IpAddr) -> String {
    match existing {
        Some(chain) if !chain.trim().is_empty() => format!("{chain}, {client_ip}"),
        _ => client_ip.to_string(),
    }
}

// =============================================================================
// HANDLER
// =============================================================================

const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Proxy an analytics event to `{upstream}/api/event`.
pub async fn forward_event(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ForwardError> {
    let mut upstream_headers = filtered_headers(&headers);

    let existing_chain = headers
        .get(&X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok());
    let chain = forwarded_for(existing_chain, addr.ip());
    if let Ok(value) = HeaderValue::from_str(&chain) {
        upstream_headers.insert(X_FORWARDED_FOR.clone(), value);
    }

    let upstream_response = state
        .client
        .request(method, format!("{}/api/event", state.upstream))
        .headers(upstream_headers)
        .body(body)
        .send()
        .await?;

    let status = upstream_response.status();
    let response_headers = filtered_headers(upstream_response.headers());
    let body = upstream_response.bytes().await?;

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

#[cfg(test)]
#[path = "forward_test.rs"]
mod forward_test;
