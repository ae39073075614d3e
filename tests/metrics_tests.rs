//! Tests for metric registration and text exposition.

use indexwatch::metrics::{encode_text, SamplerMetrics};
use prometheus::Registry;

#[test]
fn aggregate_families_are_always_exposed() {
    let registry = Registry::new();
    let metrics = SamplerMetrics::new(&registry).unwrap();
    metrics.up.set(1.0);
    metrics.total_scrapes.inc();

    let text = encode_text(&registry).unwrap();
    assert!(text.contains("elasticsearch_indices_settings_stats_up 1"));
    assert!(text.contains("elasticsearch_indices_settings_stats_total_scrapes 1"));
    assert!(text.contains("elasticsearch_indices_settings_stats_json_parse_failures 0"));
    assert!(text.contains("elasticsearch_indices_settings_stats_read_only_indices 0"));
}

#[test]
fn per_index_series_carry_the_index_label() {
    let registry = Registry::new();
    let metrics = SamplerMetrics::new(&registry).unwrap();
    metrics
        .total_fields
        .with_label_values(&["logs-2023-01-01"])
        .set(2000.0);

    let text = encode_text(&registry).unwrap();
    assert!(text
        .contains("elasticsearch_indices_settings_total_fields{index=\"logs-2023-01-01\"} 2000"));
}

#[test]
fn duplicate_registration_is_rejected() {
    let registry = Registry::new();
    SamplerMetrics::new(&registry).unwrap();
    assert!(SamplerMetrics::new(&registry).is_err());
}

#[test]
fn reset_drops_per_index_series() {
    let registry = Registry::new();
    let metrics = SamplerMetrics::new(&registry).unwrap();
    metrics.replicas.with_label_values(&["idx-1"]).set(2.0);
    metrics.reset_index_series();

    let text = encode_text(&registry).unwrap();
    assert!(!text.contains("idx-1"));
}
