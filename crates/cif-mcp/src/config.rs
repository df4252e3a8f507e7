//! Configuration for the CIF lookup MCP server.

use std::str::FromStr;
use std::time::Duration;

/// External service constants.
pub mod api {
    use std::time::Duration;

    /// Base URL of the COD REST API.
    pub const COD_API_URL: &str = "https://www.crystallography.net/cod";

    /// Base URL CIF downloads are linked under.
    pub const COD_FILE_URL: &str = "http://www.crystallography.net/cod";

    /// arXiv advanced search endpoint used for derived paper links.
    pub const ARXIV_ADVANCED_SEARCH: &str = "https://arxiv.org/search/advanced";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Upper bound for a whole repository lookup, retries included.
    pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(45);

    /// Retries for transient COD failures.
    pub const MAX_RETRIES: u32 = 3;

    /// Cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 1000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Limits applied to `search_cif`.
pub mod limits {
    /// Results returned when `max_results` is omitted.
    pub const DEFAULT_MAX_RESULTS: usize = 5;

    /// Smallest accepted `max_results`.
    pub const MIN_MAX_RESULTS: usize = 1;

    /// Largest accepted `max_results`.
    pub const MAX_MAX_RESULTS: usize = 20;
}

/// Which material repository answers lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// Built-in lookup tables.
    #[default]
    Fixture,
    /// Live Crystallography Open Database.
    Cod,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixture" | "memory" => Ok(Self::Fixture),
            "cod" => Ok(Self::Cod),
            other => anyhow::bail!("unknown backend '{other}' (expected 'fixture' or 'cod')"),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository backend.
    pub backend: Backend,

    /// Base URL for the COD REST API (for testing with mock servers).
    pub cod_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Deadline for one repository lookup inside a tool call.
    pub lookup_timeout: Duration,

    /// Retries for transient failures.
    pub max_retries: u32,

    /// Cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cache size.
    pub cache_max_size: u64,
}

impl Config {
    /// Create a configuration for the given backend with default limits.
    #[must_use]
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            cod_api_url: api::COD_API_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            lookup_timeout: api::LOOKUP_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
        }
    }

    /// Create a test configuration pointing the COD backend at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            backend: Backend::Cod,
            cod_api_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            lookup_timeout: Duration::from_secs(10),
            max_retries: 0, // Fail fast in tests
            cache_ttl: Duration::from_secs(60),
            cache_max_size: 100,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// Recognised keys: `CIF_BACKEND`, `COD_API_URL`, `CIF_LOOKUP_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns error if a variable holds an invalid value.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend =
            var("CIF_BACKEND").map(|v| v.parse::<Backend>()).transpose()?.unwrap_or_default();
        let mut config = Self::new(backend);

        if let Some(url) = var("COD_API_URL") {
            config.cod_api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(secs) = var("CIF_LOOKUP_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid CIF_LOOKUP_TIMEOUT_SECS '{secs}': {e}"))?;
            config.lookup_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Backend::Fixture)
    }
}
