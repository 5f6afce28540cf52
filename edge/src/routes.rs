//! Router assembly.

use axum::Router;
use axum::routing::{any, get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{forward, script};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/event", any(forward::forward_event))
        .route("/js/script.js", get(script::serve_script))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
