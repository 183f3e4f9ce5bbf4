use serde_derive::Serialize;
use tracing::error;

/// Represents a context for the voicemail export used for the structured logging.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct VoicemailLogContext<'a> {
    /// ID of the conversation the voicemail was left in.
    pub conversation_id: &'a str,
    /// ID of the queue the voicemail was queued in.
    pub queue_id: &'a str,
}

impl<'a> VoicemailLogContext<'a> {
    /// Returns context used for the structured logging.
    pub fn new(conversation_id: &'a str, queue_id: &'a str) -> Self {
        Self {
            conversation_id,
            queue_id,
        }
    }

    /// Logs the failure of the voicemail export.
    pub fn log_failure(&self, err: &anyhow::Error) {
        error!(
            conversation.id = self.conversation_id,
            queue.id = self.queue_id,
            "Failed to export voicemail: {err:?}"
        );
    }
}
