//! Crystallography Open Database REST client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - Response caching with configurable TTL

use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::Deserialize;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::MaterialRecord;
use crate::repository::MaterialRepository;

/// COD entry id; the API has served it both as a string and as a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CodId {
    Number(u64),
    Text(String),
}

/// One row of `/result?format=json`.
#[derive(Debug, Deserialize)]
struct CodEntry {
    file: CodId,
    #[serde(default)]
    formula: Option<String>,
    #[serde(default)]
    chemname: Option<String>,
    #[serde(default)]
    mineral: Option<String>,
    #[serde(default)]
    commonname: Option<String>,
}

impl CodEntry {
    fn into_record(self) -> MaterialRecord {
        let cod_id = match self.file {
            CodId::Number(n) => n.to_string(),
            CodId::Text(s) => s.trim().to_string(),
        };

        // COD wraps formulas in dashes: "- Co Li O2 -"
        let formula = self
            .formula
            .as_deref()
            .map(|f| f.trim().trim_matches('-').trim().to_string())
            .unwrap_or_default();

        let display_name = [self.chemname, self.mineral, self.commonname]
            .into_iter()
            .flatten()
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| formula.clone());

        MaterialRecord { formula, display_name, cod_id }
    }
}

/// Crystallography Open Database client.
#[derive(Clone)]
pub struct CodClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Response cache.
    cache: Cache<String, serde_json::Value>,

    /// COD API base URL.
    api_url: String,
}

impl CodClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("cif-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(10))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self { client, cache, api_url: config.cod_api_url.clone() })
    }

    /// Full-text search over COD entries.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_text(&self, text: &str) -> ClientResult<Vec<MaterialRecord>> {
        let url = format!("{}/result", self.api_url);
        let params = vec![
            ("text".to_string(), text.to_string()),
            ("format".to_string(), "json".to_string()),
        ];

        let entries: Vec<CodEntry> = self.get(&url, &params).await?;
        Ok(entries.into_iter().map(CodEntry::into_record).collect())
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let cache_key = Self::cache_key(url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            tracing::debug!(url, "COD cache hit");
            return serde_json::from_value(cached).map_err(ClientError::from);
        }

        let response = self.client.get(url).query(params).send().await?;

        let response = Self::handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;

        self.cache.insert(cache_key, value.clone()).await;

        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            500..=599 => Err(ClientError::server(status.as_u16(), text)),
            _ => Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text }),
        }
    }

    /// Generate cache key.
    fn cache_key(url: &str, params: &[(String, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

#[async_trait::async_trait]
impl MaterialRepository for CodClient {
    fn name(&self) -> &'static str {
        "cod"
    }

    async fn search_materials(
        &self,
        query: &str,
        max_results: usize,
    ) -> ClientResult<Vec<MaterialRecord>> {
        let mut records = self.search_text(query).await?;
        records.truncate(max_results);
        Ok(records)
    }

    async fn materials_in_text(&self, text: &str) -> ClientResult<Vec<MaterialRecord>> {
        self.search_text(text).await
    }
}

impl std::fmt::Debug for CodClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodClient").field("api_url", &self.api_url).finish()
    }
}
