use crate::{error::Error as VoicemailBridgeError, rotation::RotationStep};
use serde_derive::Serialize;
use tracing::error;

/// Represents a context for the rotation step used for the structured logging.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct RotationLogContext<'a> {
    /// Rotation step being executed.
    pub step: RotationStep,
    /// ID of the secret being rotated.
    pub secret_id: &'a str,
}

impl<'a> RotationLogContext<'a> {
    /// Returns context used for the structured logging.
    pub fn new(step: RotationStep, secret_id: &'a str) -> Self {
        Self { step, secret_id }
    }

    /// Logs the failure of the rotation step. This is the only place where step failures are
    /// logged, always as `(step, secret_id, error)`.
    pub fn log_failure(&self, err: &anyhow::Error) {
        error!(
            rotation.step = %self.step,
            secret.id = self.secret_id,
            error.kind = ?VoicemailBridgeError::kind_of(err),
            "Failed to execute rotation step: {err:?}"
        );
    }
}
