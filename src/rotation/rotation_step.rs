use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Step of the secret rotation protocol, executed one per invocation.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RotationStep {
    /// Creates a new version of the secret staged as pending.
    CreateSecret,
    /// Sets the pending secret in the downstream system.
    SetSecret,
    /// Validates the pending secret.
    TestSecret,
    /// Promotes the pending secret to current.
    FinishSecret,
}

impl RotationStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationStep::CreateSecret => "createSecret",
            RotationStep::SetSecret => "setSecret",
            RotationStep::TestSecret => "testSecret",
            RotationStep::FinishSecret => "finishSecret",
        }
    }
}

impl Display for RotationStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::RotationStep;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        for step in [
            RotationStep::CreateSecret,
            RotationStep::SetSecret,
            RotationStep::TestSecret,
            RotationStep::FinishSecret,
        ] {
            assert_eq!(
                serde_json::to_string(&step)?,
                format!("\"{}\"", step.as_str())
            );
            assert_eq!(
                serde_json::from_str::<RotationStep>(&format!("\"{step}\""))?,
                step
            );
        }

        Ok(())
    }

    #[test]
    fn rejects_unknown_steps() {
        assert!(serde_json::from_str::<RotationStep>(r#""rotateSecret""#).is_err());
        assert!(serde_json::from_str::<RotationStep>(r#""CreateSecret""#).is_err());
    }
}
