use anyhow::Context;
use serde_derive::{Deserialize, Serialize};
use url::Url;

/// Configuration for the integration with the Genesys Cloud contact-center platform.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GenesysConfig {
    /// Genesys Cloud environment (region domain), e.g. `mypurecloud.com` or `mypurecloud.ie`.
    pub environment: String,
    /// Overrides the URL of the platform API (`https://api.{environment}/` by default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<Url>,
    /// Overrides the URL of the platform login service (`https://login.{environment}/` by
    /// default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_url: Option<Url>,
}

impl GenesysConfig {
    /// Returns the base URL of the platform API.
    pub fn api_url(&self) -> anyhow::Result<Url> {
        self.resolve_url(self.api_url.as_ref(), "api")
    }

    /// Returns the base URL of the platform login (OAuth) service.
    pub fn login_url(&self) -> anyhow::Result<Url> {
        self.resolve_url(self.login_url.as_ref(), "login")
    }

    fn resolve_url(&self, url_override: Option<&Url>, subdomain: &str) -> anyhow::Result<Url> {
        if let Some(url) = url_override {
            return Ok(url.clone());
        }

        Url::parse(&format!("https://{subdomain}.{}/", self.environment)).with_context(|| {
            format!(
                "Cannot construct {subdomain} URL for Genesys Cloud environment ({}).",
                self.environment
            )
        })
    }
}

impl Default for GenesysConfig {
    fn default() -> Self {
        Self {
            environment: "mypurecloud.com".to_string(),
            api_url: None,
            login_url: None,
        }
    }
}
