use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::time::Duration;

/// Total request timeout used when none is configured.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for the outgoing HTTP traffic.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct HttpConfig {
    /// Client used to call the platform login service, REST API and media storage.
    pub client: HttpClientConfig,
}

/// Platform HTTP client settings. Every field is optional and falls back to its default.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Total request timeout, in milliseconds.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub timeout: Duration,
    /// Timeout for idle pooled connections, in milliseconds.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub pool_idle_timeout: Duration,
    /// Retries for transient failures (connection errors, 5xx). `0` disables retries.
    pub max_retries: u32,
    /// Logs every read and write on the client connections.
    pub verbose: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            pool_idle_timeout: DEFAULT_POOL_IDLE_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            verbose: false,
        }
    }
}
