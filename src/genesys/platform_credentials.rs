use crate::{genesys::TokenPair, secrets_store::SecretValue};
use anyhow::Context;
use serde_derive::{Deserialize, Serialize};

/// Platform OAuth client credentials along with the issued tokens, stored as the secret value.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl PlatformCredentials {
    /// Parses credentials from the secret value.
    pub fn from_secret(secret: &SecretValue) -> anyhow::Result<Self> {
        serde_json::from_str(&secret.secret_string).with_context(|| {
            format!(
                "Cannot parse platform credentials from the secret version ({}).",
                secret.version_id.as_deref().unwrap_or("unknown")
            )
        })
    }

    /// Returns new credentials with the same client ID and secret, but with the new tokens.
    pub fn with_token_pair(&self, token_pair: TokenPair) -> Self {
        Self {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
        }
    }
}

impl std::fmt::Debug for PlatformCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}
