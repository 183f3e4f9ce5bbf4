/// A single version of the secret retrieved from the secret store.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue {
    /// Unique identifier of the secret version.
    pub version_id: Option<String>,
    /// The secret payload.
    pub secret_string: String,
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretValue")
            .field("version_id", &self.version_id)
            .field("secret_string", &"[REDACTED]")
            .finish()
    }
}
