//! Tests for per-index numeric extraction and its defaults.

use indexwatch::es_settings::Settings;
use indexwatch::fields;

fn settings(v: serde_json::Value) -> Settings {
    serde_json::from_value(v).unwrap()
}

#[test]
fn total_fields_limit_parses_string_number() {
    let s = settings(serde_json::json!({
        "index": { "mapping": { "total_fields": { "limit": "2000" } } }
    }));
    assert_eq!(fields::total_fields_limit(&s), 2000.0);
}

#[test]
fn total_fields_limit_defaults_on_garbage_or_absence() {
    let garbage = settings(serde_json::json!({
        "index": { "mapping": { "total_fields": { "limit": "not-a-number" } } }
    }));
    assert_eq!(fields::total_fields_limit(&garbage), 1000.0);

    let absent = settings(serde_json::json!({ "index": {} }));
    assert_eq!(fields::total_fields_limit(&absent), 1000.0);
}

#[test]
fn replica_count_parses_string_number() {
    let s = settings(serde_json::json!({
        "index": { "number_of_replicas": "3" }
    }));
    assert_eq!(fields::replica_count(&s), 3.0);
}

#[test]
fn replica_count_defaults_to_one() {
    let absent = settings(serde_json::json!({ "index": {} }));
    assert_eq!(fields::replica_count(&absent), fields::DEFAULT_REPLICAS);
    assert_eq!(fields::DEFAULT_REPLICAS, 1.0);
}

#[test]
fn creation_date_converts_millis_to_seconds() {
    let s = settings(serde_json::json!({
        "index": { "creation_date": "1700000000000" }
    }));
    assert_eq!(fields::creation_timestamp_seconds(&s), 1_700_000_000.0);
}

#[test]
fn creation_date_defaults_to_zero() {
    let absent = settings(serde_json::json!({ "index": {} }));
    assert_eq!(fields::creation_timestamp_seconds(&absent), 0.0);

    let garbage = settings(serde_json::json!({
        "index": { "creation_date": "yesterday" }
    }));
    assert_eq!(fields::creation_timestamp_seconds(&garbage), 0.0);
}

#[test]
fn read_only_requires_the_exact_true_string() {
    let yes = settings(serde_json::json!({
        "index": { "blocks": { "read_only": "true" } }
    }));
    assert!(fields::is_read_only(&yes));

    for other in ["false", "True", "TRUE", "1", ""] {
        let s = settings(serde_json::json!({
            "index": { "blocks": { "read_only": other } }
        }));
        assert!(!fields::is_read_only(&s), "read_only={other:?}");
    }

    let absent = settings(serde_json::json!({ "index": {} }));
    assert!(!fields::is_read_only(&absent));
}

#[test]
fn every_field_defaults_independently() {
    let s = settings(serde_json::json!({
        "index": {
            "mapping": { "total_fields": { "limit": "bad" } },
            "number_of_replicas": "2",
            "creation_date": "1700000000000"
        }
    }));
    assert_eq!(fields::total_fields_limit(&s), 1000.0);
    assert_eq!(fields::replica_count(&s), 2.0);
    assert_eq!(fields::creation_timestamp_seconds(&s), 1_700_000_000.0);
}
