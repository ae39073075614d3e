//! Typed model of the `/_settings` administrative response and its fetcher.
//!
//! Decoding is tolerant: unknown fields are ignored and missing fields fall
//! back to empty strings, which the field extraction layer turns into
//! per-field defaults.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::es_http::{EsHttp, FetchError};

/// Raw per-cycle response: one entry per index name.
pub type IndexSettingsResponse = HashMap<String, IndexEntry>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexEntry {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub index: IndexInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexInfo {
    #[serde(default)]
    pub mapping: MappingSettings,
    #[serde(default)]
    pub number_of_replicas: String,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub blocks: BlockSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingSettings {
    #[serde(default)]
    pub total_fields: TotalFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TotalFields {
    #[serde(default)]
    pub limit: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockSettings {
    #[serde(default)]
    pub read_only: String,
}

/// Fetches one settings snapshot per scrape cycle.
#[derive(Clone)]
pub struct SettingsFetcher {
    http: EsHttp,
    indices_included: Vec<Arc<str>>,
}

impl SettingsFetcher {
    pub fn new(http: EsHttp, indices_included: Vec<Arc<str>>) -> Self {
        Self {
            http,
            indices_included,
        }
    }

    pub fn indices_included(&self) -> &[Arc<str>] {
        &self.indices_included
    }

    /// `_all/_settings` when no include-list is configured, otherwise the
    /// comma-joined include-list.
    pub fn settings_path(&self) -> String {
        if self.indices_included.is_empty() {
            "_all/_settings".to_string()
        } else {
            format!("{}/_settings", self.indices_included.join(","))
        }
    }

    pub async fn fetch(&self) -> Result<IndexSettingsResponse, FetchError> {
        self.http
            .get_json(&self.settings_path(), "indices settings fetch")
            .await
    }
}
