use crate::secrets_store::SecretStage;
use std::collections::BTreeMap;

/// Mapping of all secret versions to the staging labels attached to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretVersions(BTreeMap<String, Vec<String>>);

impl SecretVersions {
    /// Returns the ID of the version the specified staging label is attached to, if any.
    pub fn version_with_stage(&self, stage: SecretStage) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, stages)| stages.iter().any(|label| label == stage.as_str()))
            .map(|(version_id, _)| version_id.as_str())
    }

    /// Returns staging labels attached to the specified version.
    pub fn stages(&self, version_id: &str) -> &[String] {
        self.0
            .get(version_id)
            .map(|stages| stages.as_slice())
            .unwrap_or_default()
    }
}

impl<V: Into<String>, S: Into<String>> FromIterator<(V, Vec<S>)> for SecretVersions {
    fn from_iter<T: IntoIterator<Item = (V, Vec<S>)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(version_id, stages)| {
                    (
                        version_id.into(),
                        stages.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
        )
    }
}
