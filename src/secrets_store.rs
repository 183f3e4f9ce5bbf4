mod aws_secrets_store;
mod secret_stage;
mod secret_value;
mod secret_versions;

pub use self::{
    aws_secrets_store::AwsSecretsStore, secret_stage::SecretStage, secret_value::SecretValue,
    secret_versions::SecretVersions,
};
use async_trait::async_trait;

/// Versioned secret storage with staging labels.
#[async_trait]
pub trait SecretsStore: Send + Sync {
    /// Retrieves the secret version the specified staging label is attached to. Fails with the
    /// `ErrorKind::ResourceNotFound` error if there is no such secret or version.
    async fn get_secret_value(
        &self,
        secret_id: &str,
        stage: SecretStage,
    ) -> anyhow::Result<SecretValue>;

    /// Stores a new version of the secret with the specified idempotency token used as the
    /// version ID, and attaches the staging labels to it.
    async fn put_secret_value(
        &self,
        secret_id: &str,
        client_request_token: &str,
        secret_string: &str,
        stages: &[SecretStage],
    ) -> anyhow::Result<()>;

    /// Retrieves all versions of the secret along with their staging labels.
    async fn describe_secret(&self, secret_id: &str) -> anyhow::Result<SecretVersions>;

    /// Atomically moves the staging label to the `move_to_version_id` version, removing it from
    /// the `remove_from_version_id` version.
    async fn update_secret_version_stage(
        &self,
        secret_id: &str,
        stage: SecretStage,
        move_to_version_id: &str,
        remove_from_version_id: Option<&str>,
    ) -> anyhow::Result<()>;
}

#[cfg(test)]
pub mod tests {
    use super::{SecretStage, SecretValue, SecretVersions, SecretsStore};
    use crate::error::Error as VoicemailBridgeError;
    use anyhow::bail;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Describes a call made to the `MockSecretsStore`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SecretsStoreCall {
        GetSecretValue {
            secret_id: String,
            stage: SecretStage,
        },
        PutSecretValue {
            secret_id: String,
            client_request_token: String,
            secret_string: String,
            stages: Vec<SecretStage>,
        },
        DescribeSecret {
            secret_id: String,
        },
        UpdateSecretVersionStage {
            secret_id: String,
            stage: SecretStage,
            move_to_version_id: String,
            remove_from_version_id: Option<String>,
        },
    }

    #[derive(Debug, Clone)]
    struct MockSecretVersion {
        version_id: String,
        secret_string: String,
        stages: Vec<String>,
    }

    /// In-memory secrets store for a single secret that follows staging labels semantics and
    /// records every call.
    #[derive(Debug, Default)]
    pub struct MockSecretsStore {
        versions: Mutex<Vec<MockSecretVersion>>,
        calls: Mutex<Vec<SecretsStoreCall>>,
        failure: Mutex<Option<String>>,
    }

    impl MockSecretsStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_version<V: Into<String>, S: Into<String>>(
            self,
            version_id: V,
            secret_string: S,
            stages: &[SecretStage],
        ) -> Self {
            self.versions.lock().unwrap().push(MockSecretVersion {
                version_id: version_id.into(),
                secret_string: secret_string.into(),
                stages: stages.iter().map(|stage| stage.to_string()).collect(),
            });
            self
        }

        /// Makes every subsequent call fail with the specified message.
        pub fn with_failure<M: Into<String>>(self, message: M) -> Self {
            *self.failure.lock().unwrap() = Some(message.into());
            self
        }

        pub fn calls(&self) -> Vec<SecretsStoreCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn secret_string(&self, version_id: &str) -> Option<String> {
            self.versions
                .lock()
                .unwrap()
                .iter()
                .find(|version| version.version_id == version_id)
                .map(|version| version.secret_string.clone())
        }

        pub fn versions(&self) -> SecretVersions {
            self.versions
                .lock()
                .unwrap()
                .iter()
                .map(|version| (version.version_id.clone(), version.stages.clone()))
                .collect()
        }

        fn record(&self, call: SecretsStoreCall) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push(call);
            if let Some(message) = self.failure.lock().unwrap().as_ref() {
                bail!(message.clone());
            }

            Ok(())
        }
    }

    #[async_trait]
    impl SecretsStore for MockSecretsStore {
        async fn get_secret_value(
            &self,
            secret_id: &str,
            stage: SecretStage,
        ) -> anyhow::Result<SecretValue> {
            self.record(SecretsStoreCall::GetSecretValue {
                secret_id: secret_id.to_string(),
                stage,
            })?;

            let versions = self.versions.lock().unwrap();
            match versions
                .iter()
                .find(|version| version.stages.iter().any(|label| label == stage.as_str()))
            {
                Some(version) => Ok(SecretValue {
                    version_id: Some(version.version_id.clone()),
                    secret_string: version.secret_string.clone(),
                }),
                None => bail!(VoicemailBridgeError::resource_not_found(format!(
                    "Secrets Manager can't find the specified secret value for staging label: {stage}"
                ))),
            }
        }

        async fn put_secret_value(
            &self,
            secret_id: &str,
            client_request_token: &str,
            secret_string: &str,
            stages: &[SecretStage],
        ) -> anyhow::Result<()> {
            self.record(SecretsStoreCall::PutSecretValue {
                secret_id: secret_id.to_string(),
                client_request_token: client_request_token.to_string(),
                secret_string: secret_string.to_string(),
                stages: stages.to_vec(),
            })?;

            let mut versions = self.versions.lock().unwrap();
            let labels = stages
                .iter()
                .map(|stage| stage.to_string())
                .collect::<Vec<_>>();
            for version in versions.iter_mut() {
                version.stages.retain(|label| !labels.contains(label));
            }
            versions.push(MockSecretVersion {
                version_id: client_request_token.to_string(),
                secret_string: secret_string.to_string(),
                stages: labels,
            });

            Ok(())
        }

        async fn describe_secret(&self, secret_id: &str) -> anyhow::Result<SecretVersions> {
            self.record(SecretsStoreCall::DescribeSecret {
                secret_id: secret_id.to_string(),
            })?;

            Ok(self.versions())
        }

        async fn update_secret_version_stage(
            &self,
            secret_id: &str,
            stage: SecretStage,
            move_to_version_id: &str,
            remove_from_version_id: Option<&str>,
        ) -> anyhow::Result<()> {
            self.record(SecretsStoreCall::UpdateSecretVersionStage {
                secret_id: secret_id.to_string(),
                stage,
                move_to_version_id: move_to_version_id.to_string(),
                remove_from_version_id: remove_from_version_id.map(str::to_string),
            })?;

            let mut versions = self.versions.lock().unwrap();
            if !versions
                .iter()
                .any(|version| version.version_id == move_to_version_id)
            {
                bail!(VoicemailBridgeError::resource_not_found(format!(
                    "Secrets Manager can't find the specified secret version: {move_to_version_id}"
                )));
            }

            for version in versions.iter_mut() {
                if Some(version.version_id.as_str()) == remove_from_version_id {
                    version.stages.retain(|label| label != stage.as_str());
                    if stage == SecretStage::Current {
                        version.stages.push(SecretStage::Previous.to_string());
                    }
                } else if stage == SecretStage::Current {
                    version
                        .stages
                        .retain(|label| label != SecretStage::Previous.as_str());
                }

                if version.version_id == move_to_version_id {
                    version.stages.push(stage.to_string());
                }
            }

            Ok(())
        }
    }
}
