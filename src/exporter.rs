//! Scrape loop and `/metrics` HTTP exposition.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use prometheus::Registry;
use tokio::time;
use tracing::{error, info};

use crate::metrics;
use crate::sampler::SettingsSampler;

/// Runs one scrape per tick, forever. The loop owns the sampler, so cycles
/// are serialized by construction.
pub async fn run_scrape_loop(sampler: SettingsSampler, interval: Duration) {
    let mut ticker = time::interval(interval);
    loop {
        ticker.tick().await;
        sampler.scrape().await;
    }
}

pub fn router(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(registry)
}

pub async fn serve(listen_addr: &str, registry: Arc<Registry>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("bind {listen_addr}"))?;
    info!("serving metrics on http://{listen_addr}/metrics");
    axum::serve(listener, router(registry))
        .await
        .context("metrics server")?;
    Ok(())
}

async fn metrics_handler(State(registry): State<Arc<Registry>>) -> Response {
    match metrics::encode_text(&registry) {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(err) => {
            error!("failed to encode metrics: {err:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "encode failure").into_response()
        }
    }
}
