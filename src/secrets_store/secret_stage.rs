use std::fmt::{Display, Formatter};

/// Staging label that points to exactly one version of a secret.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SecretStage {
    /// The version that is currently in use (`AWSCURRENT`).
    Current,
    /// The version that is being validated before promotion (`AWSPENDING`).
    Pending,
    /// The version that was in use before the last promotion (`AWSPREVIOUS`). The store moves
    /// it on its own when the current stage moves.
    #[cfg(test)]
    Previous,
}

impl SecretStage {
    /// Returns the staging label as it's known to the secret store.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretStage::Current => "AWSCURRENT",
            SecretStage::Pending => "AWSPENDING",
            #[cfg(test)]
            SecretStage::Previous => "AWSPREVIOUS",
        }
    }
}

impl Display for SecretStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::SecretStage;

    #[test]
    fn has_store_labels() {
        assert_eq!(SecretStage::Current.as_str(), "AWSCURRENT");
        assert_eq!(SecretStage::Pending.as_str(), "AWSPENDING");
        assert_eq!(SecretStage::Previous.to_string(), "AWSPREVIOUS");
    }
}
