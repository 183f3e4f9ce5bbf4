use crate::{
    error::Error as VoicemailBridgeError,
    secrets_store::{SecretStage, SecretValue, SecretVersions, SecretsStore},
};
use anyhow::{Context, anyhow, bail};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::{
    Client as SecretsManagerClient, error::SdkError as SecretsManagerSdkError,
};

/// Secrets store backed by AWS Secrets Manager.
#[derive(Clone, Debug)]
pub struct AwsSecretsStore {
    client: SecretsManagerClient,
}

impl AwsSecretsStore {
    /// Creates AWS Secrets Manager backed store from the shared SDK config.
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: SecretsManagerClient::new(sdk_config),
        }
    }
}

/// Converts Secrets Manager SDK error to the native error, tagging missing resources so that
/// callers can distinguish them by kind.
fn map_sdk_error<E, R>(
    err: SecretsManagerSdkError<E, R>,
    is_not_found: impl FnOnce(&E) -> bool,
    context: String,
) -> anyhow::Error
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let not_found = err.as_service_error().is_some_and(is_not_found);
    let err = anyhow!(err).context(context);
    if not_found {
        anyhow!(VoicemailBridgeError::resource_not_found_with_root_cause(
            err
        ))
    } else {
        err
    }
}

#[async_trait]
impl SecretsStore for AwsSecretsStore {
    async fn get_secret_value(
        &self,
        secret_id: &str,
        stage: SecretStage,
    ) -> anyhow::Result<SecretValue> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .version_stage(stage.as_str())
            .send()
            .await
            .map_err(|err| {
                map_sdk_error(
                    err,
                    |err| err.is_resource_not_found_exception(),
                    format!("Cannot retrieve secret ({secret_id}) value staged as {stage}."),
                )
            })?;

        let Some(secret_string) = output.secret_string() else {
            bail!("Secret ({secret_id}) value staged as {stage} is not a string.");
        };

        Ok(SecretValue {
            version_id: output.version_id().map(str::to_string),
            secret_string: secret_string.to_string(),
        })
    }

    async fn put_secret_value(
        &self,
        secret_id: &str,
        client_request_token: &str,
        secret_string: &str,
        stages: &[SecretStage],
    ) -> anyhow::Result<()> {
        self.client
            .put_secret_value()
            .secret_id(secret_id)
            .client_request_token(client_request_token)
            .secret_string(secret_string)
            .set_version_stages(Some(
                stages.iter().map(|stage| stage.to_string()).collect(),
            ))
            .send()
            .await
            .with_context(|| {
                format!("Cannot put secret ({secret_id}) value ({client_request_token}).")
            })?;

        Ok(())
    }

    async fn describe_secret(&self, secret_id: &str) -> anyhow::Result<SecretVersions> {
        let output = self
            .client
            .describe_secret()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|err| {
                map_sdk_error(
                    err,
                    |err| err.is_resource_not_found_exception(),
                    format!("Cannot describe secret ({secret_id})."),
                )
            })?;

        Ok(output
            .version_ids_to_stages()
            .map(|versions| {
                versions
                    .iter()
                    .map(|(version_id, stages)| (version_id.clone(), stages.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_secret_version_stage(
        &self,
        secret_id: &str,
        stage: SecretStage,
        move_to_version_id: &str,
        remove_from_version_id: Option<&str>,
    ) -> anyhow::Result<()> {
        self.client
            .update_secret_version_stage()
            .secret_id(secret_id)
            .version_stage(stage.as_str())
            .move_to_version_id(move_to_version_id)
            .set_remove_from_version_id(remove_from_version_id.map(str::to_string))
            .send()
            .await
            .map_err(|err| {
                map_sdk_error(
                    err,
                    |err| err.is_resource_not_found_exception(),
                    format!(
                        "Cannot move {stage} stage of the secret ({secret_id}) to version ({move_to_version_id})."
                    ),
                )
            })?;

        Ok(())
    }
}
