//! Prometheus metric families for the settings sampler.
//!
//! Four aggregates describe the cycle itself; three `index`-labeled gauges
//! carry the per-index observations. All are registered once at startup and
//! exposed on every scrape of the registry.

use anyhow::{Context, Result};
use prometheus::{Encoder, Gauge, GaugeVec, IntCounter, Opts, Registry, TextEncoder};

const NAMESPACE: &str = "elasticsearch";
const AGG_SUBSYSTEM: &str = "indices_settings_stats";
const INDEX_SUBSYSTEM: &str = "indices_settings";

#[derive(Clone)]
pub struct SamplerMetrics {
    pub up: Gauge,
    pub total_scrapes: IntCounter,
    pub json_parse_failures: IntCounter,
    pub read_only_indices: Gauge,
    pub total_fields: GaugeVec,
    pub replicas: GaugeVec,
    pub creation_timestamp_seconds: GaugeVec,
}

impl SamplerMetrics {
    pub fn new(registry: &Registry) -> prometheus::Result<Self> {
        let up = Gauge::with_opts(
            Opts::new(
                "up",
                "Was the last scrape of the indices settings endpoint successful.",
            )
            .namespace(NAMESPACE)
            .subsystem(AGG_SUBSYSTEM),
        )?;
        let total_scrapes = IntCounter::with_opts(
            Opts::new("total_scrapes", "Current total indices settings scrapes.")
                .namespace(NAMESPACE)
                .subsystem(AGG_SUBSYSTEM),
        )?;
        let json_parse_failures = IntCounter::with_opts(
            Opts::new(
                "json_parse_failures",
                "Number of errors while parsing JSON.",
            )
            .namespace(NAMESPACE)
            .subsystem(AGG_SUBSYSTEM),
        )?;
        let read_only_indices = Gauge::with_opts(
            Opts::new(
                "read_only_indices",
                "Current number of read only indices within the cluster.",
            )
            .namespace(NAMESPACE)
            .subsystem(AGG_SUBSYSTEM),
        )?;

        let index_label = ["index"];
        let total_fields = GaugeVec::new(
            Opts::new("total_fields", "Index mapping setting for total_fields.")
                .namespace(NAMESPACE)
                .subsystem(INDEX_SUBSYSTEM),
            &index_label,
        )?;
        let replicas = GaugeVec::new(
            Opts::new("replicas", "Index setting number_of_replicas.")
                .namespace(NAMESPACE)
                .subsystem(INDEX_SUBSYSTEM),
            &index_label,
        )?;
        let creation_timestamp_seconds = GaugeVec::new(
            Opts::new("creation_timestamp_seconds", "Index setting creation_date.")
                .namespace(NAMESPACE)
                .subsystem(INDEX_SUBSYSTEM),
            &index_label,
        )?;

        registry.register(Box::new(up.clone()))?;
        registry.register(Box::new(total_scrapes.clone()))?;
        registry.register(Box::new(json_parse_failures.clone()))?;
        registry.register(Box::new(read_only_indices.clone()))?;
        registry.register(Box::new(total_fields.clone()))?;
        registry.register(Box::new(replicas.clone()))?;
        registry.register(Box::new(creation_timestamp_seconds.clone()))?;

        Ok(Self {
            up,
            total_scrapes,
            json_parse_failures,
            read_only_indices,
            total_fields,
            replicas,
            creation_timestamp_seconds,
        })
    }

    /// Drop all per-index series so a cycle never re-serves stale samples.
    pub fn reset_index_series(&self) {
        self.total_fields.reset();
        self.replicas.reset();
        self.creation_timestamp_seconds.reset();
    }
}

/// Encode the registry in the Prometheus text exposition format.
pub fn encode_text(registry: &Registry) -> Result<String> {
    let mut buf = Vec::new();
    TextEncoder::new()
        .encode(&registry.gather(), &mut buf)
        .context("encode metrics")?;
    String::from_utf8(buf).context("metrics output was not utf-8")
}
