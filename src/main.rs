use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use prometheus::Registry;
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use indexwatch::config::Config;
use indexwatch::es_http::EsHttp;
use indexwatch::es_settings::SettingsFetcher;
use indexwatch::exporter;
use indexwatch::metrics::SamplerMetrics;
use indexwatch::sampler::SettingsSampler;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    init_tracing();

    let cfg_path = std::env::args().nth(1).map(PathBuf::from);
    let cfg = Config::load(cfg_path)?;
    info!(
        "starting indexwatch against {} (groups={}, most_recent={})",
        cfg.es_url,
        cfg.index_groups.len(),
        cfg.num_most_recent_indices
    );

    let registry = Arc::new(Registry::new());
    let metrics = SamplerMetrics::new(&registry)?;

    let http = EsHttp::new(
        cfg.es_url.clone(),
        cfg.es_user.clone(),
        cfg.es_pass.clone(),
        cfg.http_timeout(),
    )?;
    let fetcher = SettingsFetcher::new(http, cfg.indices_included.clone());
    let sampler = SettingsSampler::new(
        fetcher,
        cfg.num_most_recent_indices,
        cfg.matchers(),
        metrics,
    );

    let scrape = tokio::spawn(exporter::run_scrape_loop(sampler, cfg.scrape_interval()));
    let server = {
        let registry = registry.clone();
        let listen_addr = cfg.listen_addr.clone();
        tokio::spawn(async move { exporter::serve(&listen_addr, registry).await })
    };

    signal::ctrl_c().await?;
    info!("shutdown signal received");
    scrape.abort();
    server.abort();
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();
}
