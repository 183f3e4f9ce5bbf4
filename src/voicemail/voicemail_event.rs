use crate::logging::VoicemailLogContext;
use serde_derive::{Deserialize, Serialize};

/// Conversation event delivered by the event bus once the caller leaves a voicemail.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VoicemailEvent {
    pub detail: VoicemailEventDetail,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailEventDetail {
    pub event_body: VoicemailEventBody,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailEventBody {
    /// ID of the conversation the voicemail was left in.
    pub conversation_id: String,
    /// ID of the queue the voicemail was queued in.
    pub queue_id: String,
}

impl VoicemailEvent {
    /// Returns context used for the structured logging.
    pub fn log_context(&self) -> VoicemailLogContext<'_> {
        VoicemailLogContext::new(
            &self.detail.event_body.conversation_id,
            &self.detail.event_body.queue_id,
        )
    }
}
