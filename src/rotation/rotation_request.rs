use crate::{logging::RotationLogContext, rotation::RotationStep};
use serde_derive::{Deserialize, Serialize};

/// Rotation step event sent by the rotation orchestrator (AWS Secrets Manager).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RotationRequest {
    /// ID (ARN) of the secret being rotated.
    pub secret_id: String,
    /// Idempotency token, also used as the ID of the new secret version.
    pub client_request_token: String,
    /// Rotation step to execute.
    pub step: RotationStep,
}

impl RotationRequest {
    /// Returns context used for the structured logging.
    pub fn log_context(&self) -> RotationLogContext<'_> {
        RotationLogContext::new(self.step, &self.secret_id)
    }
}
