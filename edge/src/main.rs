//! Analytics edge forwarder.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits between the site and the analytics upstream so browsers only ever
//! talk to first-party origins. `/api/event` is proxied verbatim with the
//! client address preserved in `X-Forwarded-For`; `/js/script.js` is served
//! from a 24h in-process cache. No retries, no persistence.

mod forward;
mod routes;
mod script;
mod state;

use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let upstream = std::env::var("UPSTREAM_URL")
        .unwrap_or_else(|_| "https://plausible.example.com".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8443".into())
        .parse()
        .expect("invalid PORT");

    let state = state::AppState::new(upstream);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "edge forwarder listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server failed");
}
