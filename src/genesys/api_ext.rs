use crate::{
    api::Api,
    genesys::{GenesysUser, TokenPair, VoicemailMedia, VoicemailMessagesPage},
    object_store::ObjectStore,
    secrets_store::SecretsStore,
};
use anyhow::{Context, bail};
use bytes::Bytes;
use reqwest::{
    Response, StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde_json::json;
use url::Url;

/// API to work with the Genesys Cloud platform: OAuth login service and the platform REST API.
pub struct GenesysApi<'a, SS: SecretsStore, OS: ObjectStore> {
    api: &'a Api<SS, OS>,
}

impl<'a, SS: SecretsStore, OS: ObjectStore> GenesysApi<'a, SS, OS> {
    /// Creates Genesys Cloud API.
    pub fn new(api: &'a Api<SS, OS>) -> Self {
        Self { api }
    }

    /// Exchanges the refresh token for a new pair of access and refresh tokens using the OAuth
    /// refresh token grant.
    pub async fn refresh_token(
        &self,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> anyhow::Result<TokenPair> {
        let response = self
            .api
            .network
            .http_client
            .post(self.login_endpoint("oauth/token")?)
            .basic_auth(client_id, Some(client_secret))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(format!(
                "grant_type=refresh_token&refresh_token={}",
                urlencoding::encode(refresh_token)
            ))
            .send()
            .await
            .with_context(|| format!("Cannot refresh access token for client ({client_id})."))?;

        ensure_success(
            response,
            format!("Failed to refresh access token for client ({client_id})"),
        )
        .await?
        .json()
        .await
        .with_context(|| format!("Cannot deserialize token pair for client ({client_id})."))
    }

    /// Retrieves the user the access token was issued for. Returns `None` if the platform
    /// doesn't return any user for the token.
    pub async fn get_authenticated_user(
        &self,
        access_token: &str,
    ) -> anyhow::Result<Option<GenesysUser>> {
        let response = self
            .api
            .network
            .http_client
            .get(self.api_endpoint("api/v2/users/me")?)
            .bearer_auth(access_token)
            .send()
            .await
            .context("Cannot retrieve authenticated user.")?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = ensure_success(response, "Failed to retrieve authenticated user".to_string())
            .await?
            .bytes()
            .await
            .context("Cannot read authenticated user.")?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&body).context("Cannot deserialize authenticated user.")
    }

    /// Retrieves a single page of the voicemail messages queued in the specified queue.
    pub async fn get_queue_voicemail_messages(
        &self,
        access_token: &str,
        queue_id: &str,
        page_number: u32,
        page_size: u32,
    ) -> anyhow::Result<VoicemailMessagesPage> {
        let mut endpoint = self.api_endpoint(&format!(
            "api/v2/voicemail/queues/{}/messages",
            urlencoding::encode(queue_id)
        ))?;
        endpoint
            .query_pairs_mut()
            .append_pair("pageSize", &page_size.to_string())
            .append_pair("pageNumber", &page_number.to_string());

        let response = self
            .api
            .network
            .http_client
            .get(endpoint)
            .bearer_auth(access_token)
            .send()
            .await
            .with_context(|| {
                format!("Cannot retrieve voicemail messages for queue ({queue_id}, page {page_number}).")
            })?;

        ensure_success(
            response,
            format!("Failed to retrieve voicemail messages for queue ({queue_id}, page {page_number})"),
        )
        .await?
        .json()
        .await
        .with_context(|| {
            format!("Cannot deserialize voicemail messages for queue ({queue_id}, page {page_number}).")
        })
    }

    /// Retrieves the location of the voicemail message recording.
    pub async fn get_voicemail_message_media(
        &self,
        access_token: &str,
        message_id: &str,
    ) -> anyhow::Result<VoicemailMedia> {
        let response = self
            .api
            .network
            .http_client
            .get(self.voicemail_message_endpoint(message_id, "/media")?)
            .bearer_auth(access_token)
            .send()
            .await
            .with_context(|| format!("Cannot retrieve voicemail media ({message_id})."))?;

        ensure_success(
            response,
            format!("Failed to retrieve voicemail media ({message_id})"),
        )
        .await?
        .json()
        .await
        .with_context(|| format!("Cannot deserialize voicemail media ({message_id})."))
    }

    /// Downloads the voicemail recording from the media URI returned by the platform.
    pub async fn download_media(&self, media_file_uri: &Url) -> anyhow::Result<Bytes> {
        let response = self
            .api
            .network
            .http_client
            .get(media_file_uri.clone())
            .header(ACCEPT, "application/octet-stream")
            .send()
            .await
            .with_context(|| format!("Cannot download voicemail media ({media_file_uri})."))?;

        ensure_success(
            response,
            format!("Failed to download voicemail media ({media_file_uri})"),
        )
        .await?
        .bytes()
        .await
        .with_context(|| format!("Cannot read voicemail media ({media_file_uri})."))
    }

    /// Marks the voicemail message as read.
    pub async fn mark_voicemail_message_read(
        &self,
        access_token: &str,
        message_id: &str,
    ) -> anyhow::Result<()> {
        let response = self
            .api
            .network
            .http_client
            .patch(self.voicemail_message_endpoint(message_id, "")?)
            .bearer_auth(access_token)
            .json(&json!({ "read": true }))
            .send()
            .await
            .with_context(|| format!("Cannot mark voicemail message ({message_id}) as read."))?;

        ensure_success(
            response,
            format!("Failed to mark voicemail message ({message_id}) as read"),
        )
        .await?;

        Ok(())
    }

    /// Deletes the voicemail message.
    pub async fn delete_voicemail_message(
        &self,
        access_token: &str,
        message_id: &str,
    ) -> anyhow::Result<()> {
        let response = self
            .api
            .network
            .http_client
            .delete(self.voicemail_message_endpoint(message_id, "")?)
            .bearer_auth(access_token)
            .send()
            .await
            .with_context(|| format!("Cannot delete voicemail message ({message_id})."))?;

        ensure_success(
            response,
            format!("Failed to delete voicemail message ({message_id})"),
        )
        .await?;

        Ok(())
    }

    /// Disconnects the callback conversation so that it's not routed to an agent.
    pub async fn disconnect_callback(
        &self,
        access_token: &str,
        conversation_id: &str,
    ) -> anyhow::Result<()> {
        let response = self
            .api
            .network
            .http_client
            .patch(self.api_endpoint(&format!(
                "api/v2/conversations/callbacks/{}",
                urlencoding::encode(conversation_id)
            ))?)
            .bearer_auth(access_token)
            .json(&json!({
                "state": "disconnected",
                "participants": [{ "callbacks": [{ "state": "disconnected" }] }]
            }))
            .send()
            .await
            .with_context(|| format!("Cannot disconnect callback ({conversation_id})."))?;

        ensure_success(
            response,
            format!("Failed to disconnect callback ({conversation_id})"),
        )
        .await?;

        Ok(())
    }

    fn api_endpoint(&self, path: &str) -> anyhow::Result<Url> {
        let api_url = self.api.config.genesys.api_url()?;
        api_url
            .join(path)
            .with_context(|| format!("Cannot construct API endpoint ({api_url}, {path})."))
    }

    fn login_endpoint(&self, path: &str) -> anyhow::Result<Url> {
        let login_url = self.api.config.genesys.login_url()?;
        login_url
            .join(path)
            .with_context(|| format!("Cannot construct login endpoint ({login_url}, {path})."))
    }

    fn voicemail_message_endpoint(&self, message_id: &str, suffix: &str) -> anyhow::Result<Url> {
        self.api_endpoint(&format!(
            "api/v2/voicemail/messages/{}{suffix}",
            urlencoding::encode(message_id)
        ))
    }
}

/// Returns the response if its status indicates success, and fails with the response body
/// otherwise.
async fn ensure_success(response: Response, error_message: String) -> anyhow::Result<Response> {
    let status_code = response.status();
    if status_code.is_success() {
        return Ok(response);
    }

    bail!(
        "{error_message} ({status_code}): {}",
        response.text().await.unwrap_or_default()
    )
}

impl<SS: SecretsStore, OS: ObjectStore> Api<SS, OS> {
    /// Returns an API to work with the Genesys Cloud platform.
    pub fn genesys(&self) -> GenesysApi<'_, SS, OS> {
        GenesysApi::new(self)
    }
}
