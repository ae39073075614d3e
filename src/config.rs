use std::sync::Arc;
use std::{env, fs, path::PathBuf, time::Duration};

use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;

use crate::categorize::GroupMatcher;
use crate::matcher::GlobMatcher;

#[derive(Debug, Clone)]
pub struct Config {
    pub es_url: Arc<str>,
    pub es_user: Arc<str>,
    pub es_pass: Arc<str>,
    pub indices_included: Vec<Arc<str>>,
    pub num_most_recent_indices: i64,
    pub index_groups: Vec<IndexGroup>,
    pub scrape_interval_secs: u64,
    pub http_timeout_secs: u64,
    pub listen_addr: String,
}

/// One configured bucket. Declaration order in the config file is the
/// evaluation order, so it is part of the contract.
#[derive(Debug, Clone)]
pub struct IndexGroup {
    pub name: Arc<str>,
    pub pattern: Arc<str>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    es_url: String,
    #[serde(default)]
    es_user: String,
    #[serde(default)]
    es_pass: String,
    #[serde(default)]
    indices_included: Vec<String>,
    #[serde(default)]
    num_most_recent_indices: i64,
    #[serde(default)]
    index_groups: Vec<RawIndexGroup>,
    #[serde(default = "default_scrape_interval_secs")]
    scrape_interval_secs: u64,
    #[serde(default = "default_http_timeout_secs")]
    http_timeout_secs: u64,
    #[serde(default = "default_listen_addr")]
    listen_addr: String,
}

#[derive(Debug, Deserialize)]
struct RawIndexGroup {
    name: String,
    pattern: String,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            es_url: raw.es_url.into(),
            es_user: raw.es_user.into(),
            es_pass: raw.es_pass.into(),
            indices_included: collect_names(raw.indices_included),
            num_most_recent_indices: raw.num_most_recent_indices,
            index_groups: raw
                .index_groups
                .into_iter()
                .map(|g| IndexGroup {
                    name: g.name.into(),
                    pattern: g.pattern.into(),
                })
                .collect(),
            scrape_interval_secs: raw.scrape_interval_secs,
            http_timeout_secs: raw.http_timeout_secs,
            listen_addr: raw.listen_addr,
        }
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let mut cfg = if let Some(path) = path {
            let raw = fs::read_to_string(path)?;
            Config::from(toml::from_str::<RawConfig>(&raw)?)
        } else {
            let default_path = default_config_path();
            if default_path.exists() {
                let raw = fs::read_to_string(&default_path)?;
                Config::from(toml::from_str::<RawConfig>(&raw)?)
            } else {
                Self::default_from_env()?
            }
        };

        if let Ok(v) = env::var("ES_URL") {
            cfg.es_url = v.into();
        }
        if let Ok(v) = env::var("ES_USER") {
            cfg.es_user = v.into();
        }
        if let Ok(v) = env::var("ES_PASS") {
            cfg.es_pass = v.into();
        }
        if let Ok(v) = env::var("INDICES_INCLUDED") {
            cfg.indices_included = parse_names(&v);
        }
        if let Ok(v) = env::var("NUM_MOST_RECENT_INDICES") {
            if let Ok(n) = v.parse::<i64>() {
                cfg.num_most_recent_indices = n;
            }
        }
        maybe_env_u64(&mut cfg.scrape_interval_secs, "SCRAPE_INTERVAL_SECS");
        maybe_env_u64(&mut cfg.http_timeout_secs, "HTTP_TIMEOUT_SECS");
        if let Ok(v) = env::var("LISTEN_ADDR") {
            cfg.listen_addr = v;
        }

        validate_required(&cfg)?;
        Ok(cfg)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn scrape_interval(&self) -> Duration {
        Duration::from_secs(self.scrape_interval_secs)
    }

    /// Builds the group matchers in declaration order.
    pub fn matchers(&self) -> Vec<GroupMatcher> {
        self.index_groups
            .iter()
            .map(|g| GroupMatcher::new(g.name.to_string(), GlobMatcher::new(&g.pattern)))
            .collect()
    }
}

impl Config {
    fn default_from_env() -> Result<Self> {
        Ok(Self {
            es_url: env_required("ES_URL")?.into(),
            es_user: env::var("ES_USER").unwrap_or_default().into(),
            es_pass: env::var("ES_PASS").unwrap_or_default().into(),
            indices_included: parse_names(&env::var("INDICES_INCLUDED").unwrap_or_default()),
            num_most_recent_indices: env_i64("NUM_MOST_RECENT_INDICES", 0),
            index_groups: Vec::new(),
            scrape_interval_secs: env_u64("SCRAPE_INTERVAL_SECS", default_scrape_interval_secs()),
            http_timeout_secs: env_u64("HTTP_TIMEOUT_SECS", default_http_timeout_secs()),
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr()),
        })
    }
}

fn default_scrape_interval_secs() -> u64 {
    60
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_listen_addr() -> String {
    "0.0.0.0:9114".to_string()
}

fn default_config_path() -> PathBuf {
    ProjectDirs::from("com", "indexwatch", "indexwatch")
        .map(|p| p.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".indexwatch/config.toml"))
}

fn validate_required(cfg: &Config) -> Result<()> {
    if cfg.es_url.trim().is_empty() {
        anyhow::bail!("ES_URL is required (set via env or config)");
    }
    if cfg.listen_addr.trim().is_empty() {
        anyhow::bail!("LISTEN_ADDR must not be empty");
    }
    Ok(())
}

fn maybe_env_u64(val: &mut u64, key: &str) {
    if let Ok(v) = env::var(key) {
        if let Ok(n) = v.parse::<u64>() {
            *val = n;
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_required(key: &str) -> Result<String> {
    let val = env::var(key).unwrap_or_default();
    if val.trim().is_empty() {
        anyhow::bail!("{key} is required");
    }
    Ok(val)
}

fn collect_names(names: Vec<String>) -> Vec<Arc<str>> {
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .map(Arc::from)
        .collect()
}

fn parse_names(raw: &str) -> Vec<Arc<str>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Arc::from)
        .collect()
}
