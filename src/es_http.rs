use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure modes of one administrative GET.
///
/// Decode failures are kept apart from transport and status failures so the
/// caller can count schema drift separately from an unreachable or unhealthy
/// cluster.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{context} status={status} body_sample={snippet}")]
    Status {
        context: &'static str,
        status: StatusCode,
        snippet: String,
    },
    #[error("{context} decode: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode { .. })
    }
}

#[derive(Clone)]
pub struct EsHttp {
    client: Client,
    base_url: Arc<str>,
    user: Arc<str>,
    pass: Arc<str>,
}

impl EsHttp {
    pub fn new(
        base_url: impl Into<Arc<str>>,
        user: impl Into<Arc<str>>,
        pass: impl Into<Arc<str>>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
            user: user.into(),
            pass: pass.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// One GET with the body decoded as JSON. Non-2xx responses and transport
    /// failures never reach the decoder.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &'static str,
    ) -> Result<T, FetchError> {
        let resp = self
            .client
            .get(self.url(path))
            .basic_auth(&*self.user, Some(&*self.pass))
            .send()
            .await
            .map_err(|source| FetchError::Transport { context, source })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                context,
                status,
                snippet: truncate_body_snippet(&text, 500),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { context, source })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { context, source })
    }
}

pub fn normalize_base_url(base_url: impl Into<Arc<str>>) -> Arc<str> {
    let base_url: Arc<str> = base_url.into();
    if base_url.ends_with('/') {
        Arc::<str>::from(base_url.trim_end_matches('/').to_string())
    } else {
        base_url
    }
}

fn truncate_body_snippet(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    // back off to a char boundary so multibyte bodies cannot panic the cycle
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &s[..end])
}
