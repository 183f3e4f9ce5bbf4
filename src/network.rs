use crate::config::HttpClientConfig;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;

/// User agent used for all outgoing HTTP requests.
const USER_AGENT: &str = concat!("voicemail-bridge/", env!("CARGO_PKG_VERSION"));

/// Network utilities.
#[derive(Clone)]
pub struct Network {
    pub http_client: ClientWithMiddleware,
}

impl Network {
    /// Creates a new `Network` instance.
    pub fn new(http_client: ClientWithMiddleware) -> Self {
        Self { http_client }
    }

    /// Creates a new `Network` instance with the HTTP client that traces every request and
    /// retries requests that failed because of transient errors.
    pub fn create(config: &HttpClientConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .connection_verbose(config.verbose)
            .build()?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        Ok(Self::new(
            ClientBuilder::new(client)
                .with(TracingMiddleware::default())
                .with(RetryTransientMiddleware::new_with_policy(retry_policy))
                .build(),
        ))
    }
}
