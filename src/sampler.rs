//! One scrape cycle: fetch, bucket, trim, extract, publish.

use tracing::{debug, warn};

use crate::categorize::{categorize_indices, select_most_recent, GroupMatcher};
use crate::es_settings::SettingsFetcher;
use crate::fields;
use crate::metrics::SamplerMetrics;

pub struct SettingsSampler {
    fetcher: SettingsFetcher,
    num_most_recent_indices: i64,
    matchers: Vec<GroupMatcher>,
    metrics: SamplerMetrics,
}

impl SettingsSampler {
    pub fn new(
        fetcher: SettingsFetcher,
        num_most_recent_indices: i64,
        matchers: Vec<GroupMatcher>,
        metrics: SamplerMetrics,
    ) -> Self {
        Self {
            fetcher,
            num_most_recent_indices,
            matchers,
            metrics,
        }
    }

    /// Runs one cycle to completion. Nothing here fails the process; every
    /// failure path degrades to metric state plus a log line, leaving the
    /// next cycle free to try again.
    pub async fn scrape(&self) {
        self.metrics.total_scrapes.inc();

        let response = match self.fetcher.fetch().await {
            Ok(resp) => resp,
            Err(err) => {
                if err.is_decode() {
                    self.metrics.json_parse_failures.inc();
                }
                self.metrics.up.set(0.0);
                self.metrics.read_only_indices.set(0.0);
                self.metrics.reset_index_series();
                warn!("failed to fetch and decode indices settings: {err}");
                return;
            }
        };

        let buckets =
            categorize_indices(&response, self.fetcher.indices_included(), &self.matchers);
        let selected = select_most_recent(&response, buckets, self.num_most_recent_indices);

        self.metrics.up.set(1.0);
        self.metrics.reset_index_series();

        let mut read_only = 0usize;
        for (name, entry) in &selected {
            let settings = &entry.settings;
            if fields::is_read_only(settings) {
                read_only += 1;
            }
            self.metrics
                .total_fields
                .with_label_values(&[name.as_str()])
                .set(fields::total_fields_limit(settings));
            self.metrics
                .replicas
                .with_label_values(&[name.as_str()])
                .set(fields::replica_count(settings));
            self.metrics
                .creation_timestamp_seconds
                .with_label_values(&[name.as_str()])
                .set(fields::creation_timestamp_seconds(settings));
        }
        self.metrics.read_only_indices.set(read_only as f64);

        debug!(
            selected = selected.len(),
            read_only, "indices settings scrape complete"
        );
    }
}
