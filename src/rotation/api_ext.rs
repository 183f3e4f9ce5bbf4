use crate::{
    api::Api,
    error::{Error as VoicemailBridgeError, ErrorKind},
    genesys::PlatformCredentials,
    object_store::ObjectStore,
    rotation::{RotationRequest, RotationStep},
    secrets_store::{SecretStage, SecretsStore},
};
use anyhow::{Context, bail};
use tracing::info;

/// API to rotate the platform credentials stored in the secrets store.
pub struct RotationApi<'a, SS: SecretsStore, OS: ObjectStore> {
    api: &'a Api<SS, OS>,
}

impl<'a, SS: SecretsStore, OS: ObjectStore> RotationApi<'a, SS, OS> {
    /// Creates Rotation API.
    pub fn new(api: &'a Api<SS, OS>) -> Self {
        Self { api }
    }

    /// Executes the rotation step requested by the rotation orchestrator. Every step is safe to
    /// re-execute with the same request.
    pub async fn handle(&self, request: &RotationRequest) -> anyhow::Result<()> {
        let secret_id = request.secret_id.as_str();
        info!(
            rotation.step = %request.step,
            secret.id = secret_id,
            "Executing rotation step."
        );

        let result = match request.step {
            RotationStep::CreateSecret => {
                self.create_secret(secret_id, &request.client_request_token)
                    .await
            }
            RotationStep::SetSecret => {
                self.set_secret(secret_id);
                Ok(())
            }
            RotationStep::TestSecret => self.test_secret(secret_id).await,
            RotationStep::FinishSecret => {
                self.finish_secret(secret_id, &request.client_request_token)
                    .await
            }
        };

        result.inspect_err(|err| request.log_context().log_failure(err))
    }

    /// Creates a new pending version of the secret with the refreshed tokens, unless the version
    /// identified by the token is already pending.
    async fn create_secret(&self, secret_id: &str, token: &str) -> anyhow::Result<()> {
        match self
            .api
            .secrets
            .get_secret_value(secret_id, SecretStage::Pending)
            .await
        {
            Ok(pending_secret) if pending_secret.version_id.as_deref() == Some(token) => {
                info!(
                    secret.id = secret_id,
                    secret.version = token,
                    "Pending secret version already exists, skipping new secret creation."
                );
                return Ok(());
            }
            Ok(pending_secret) => {
                info!(
                    secret.id = secret_id,
                    secret.version = token,
                    secret.stale_version = ?pending_secret.version_id,
                    "Pending stage is attached to another version, creating a new one."
                );
            }
            Err(err) if VoicemailBridgeError::kind_of(&err) == ErrorKind::ResourceNotFound => {
                info!(
                    secret.id = secret_id,
                    "Pending secret version doesn't exist, creating a new one."
                );
            }
            Err(err) => return Err(err),
        }

        let current_credentials = PlatformCredentials::from_secret(
            &self
                .api
                .secrets
                .get_secret_value(secret_id, SecretStage::Current)
                .await?,
        )?;

        let token_pair = self
            .api
            .genesys()
            .refresh_token(
                &current_credentials.client_id,
                &current_credentials.client_secret,
                &current_credentials.refresh_token,
            )
            .await?;

        let pending_credentials = current_credentials.with_token_pair(token_pair);
        self.api
            .secrets
            .put_secret_value(
                secret_id,
                token,
                &serde_json::to_string(&pending_credentials)
                    .context("Cannot serialize pending platform credentials.")?,
                &[SecretStage::Pending],
            )
            .await?;

        info!(
            secret.id = secret_id,
            secret.version = token,
            "Pending secret version created successfully."
        );

        Ok(())
    }

    /// Tokens are issued by the platform itself, so there is no downstream system to set the
    /// pending secret in.
    fn set_secret(&self, secret_id: &str) {
        info!(
            secret.id = secret_id,
            "Tokens are fetched from the platform, there is nothing to set. Skipping step."
        );
    }

    /// Verifies that the pending access token identifies a platform user.
    async fn test_secret(&self, secret_id: &str) -> anyhow::Result<()> {
        let pending_credentials = PlatformCredentials::from_secret(
            &self
                .api
                .secrets
                .get_secret_value(secret_id, SecretStage::Pending)
                .await?,
        )?;

        match self
            .api
            .genesys()
            .get_authenticated_user(&pending_credentials.access_token)
            .await?
        {
            Some(user) => {
                info!(
                    secret.id = secret_id,
                    user.id = %user.id,
                    user.name = ?user.name,
                    "Pending secret is valid."
                );
                Ok(())
            }
            None => bail!(VoicemailBridgeError::user_not_found(format!(
                "Unable to find the user for client ({}) of the pending secret.",
                pending_credentials.client_id
            ))),
        }
    }

    /// Promotes the pending version identified by the token to current, unless it's already
    /// current.
    async fn finish_secret(&self, secret_id: &str, token: &str) -> anyhow::Result<()> {
        let versions = self.api.secrets.describe_secret(secret_id).await?;
        let current_version = versions.version_with_stage(SecretStage::Current);
        if current_version == Some(token) {
            info!(
                secret.id = secret_id,
                secret.version = token,
                "Version is already current, the secret is already rotated."
            );
            return Ok(());
        }

        info!(
            secret.id = secret_id,
            secret.version = token,
            secret.version_stages = ?versions.stages(token),
            "Moving current stage to the version."
        );
        self.api
            .secrets
            .update_secret_version_stage(secret_id, SecretStage::Current, token, current_version)
            .await?;

        info!(
            secret.id = secret_id,
            secret.version = token,
            secret.previous_version = ?current_version,
            "Version is now current."
        );

        Ok(())
    }
}

impl<SS: SecretsStore, OS: ObjectStore> Api<SS, OS> {
    /// Returns an API to rotate platform credentials.
    pub fn rotation(&self) -> RotationApi<'_, SS, OS> {
        RotationApi::new(self)
    }
}
