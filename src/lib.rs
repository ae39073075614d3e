//! Indexwatch - Elasticsearch index settings sampler for Prometheus.

pub mod categorize;
pub mod config;
pub mod es_http;
pub mod es_settings;
pub mod exporter;
pub mod fields;
pub mod matcher;
pub mod metrics;
pub mod sampler;
