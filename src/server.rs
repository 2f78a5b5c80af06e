use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use crate::{api, client::JaegerClient, config::Config, finder::TraceFinder};

/// Build the router. Split out of `run` so tests can serve it on an
/// ephemeral port.
pub fn app(finder: TraceFinder) -> Router {
    Router::new()
        // Health check
        .route("/health", get(api::health_handler))
        // Error categories
        .route("/traces/errors", get(api::error_traces))
        .route(
            "/traces/errors/floating-ip",
            get(api::floating_ip_error_traces),
        )
        .route("/traces/errors/quota", get(api::quota_error_traces))
        .route(
            "/traces/errors/:category/details",
            get(api::error_trace_details),
        )
        // Remediation lookups
        .route(
            "/traces/solved/floating-ip",
            get(api::solved_floating_ip_traces),
        )
        .route("/traces/solved/quota", get(api::solved_quota_traces))
        .with_state(finder)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config, port: u16) -> anyhow::Result<()> {
    // Initialize start time for uptime tracking
    api::health::init_start_time();

    let client = JaegerClient::new(&config)?;
    let finder = TraceFinder::new(client, config.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("tracesift listening on http://{}", addr);
    tracing::info!("Jaeger query API: {}", config.jaeger_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(finder)).await?;

    Ok(())
}
