//! Numeric extraction from one index's settings.
//!
//! Every field is independently defaulted, so a malformed value degrades
//! that one observation without failing the index or the cycle.

use crate::es_settings::Settings;

/// Elasticsearch's default `index.mapping.total_fields.limit`.
pub const DEFAULT_TOTAL_FIELDS: f64 = 1000.0;
/// Elasticsearch's default `index.number_of_replicas`.
pub const DEFAULT_REPLICAS: f64 = 1.0;
/// Substitute when `index.creation_date` is missing or unparsable.
pub const DEFAULT_CREATION_SECONDS: f64 = 0.0;

pub fn total_fields_limit(settings: &Settings) -> f64 {
    settings
        .index
        .mapping
        .total_fields
        .limit
        .parse()
        .unwrap_or(DEFAULT_TOTAL_FIELDS)
}

pub fn replica_count(settings: &Settings) -> f64 {
    settings
        .index
        .number_of_replicas
        .parse()
        .unwrap_or(DEFAULT_REPLICAS)
}

/// `index.creation_date` is millis since epoch; exposed in seconds.
pub fn creation_timestamp_seconds(settings: &Settings) -> f64 {
    settings
        .index
        .creation_date
        .parse::<f64>()
        .map(|ms| ms / 1000.0)
        .unwrap_or(DEFAULT_CREATION_SECONDS)
}

/// Exact string match; any other value, including absence, is writable.
pub fn is_read_only(settings: &Settings) -> bool {
    settings.index.blocks.read_only == "true"
}
