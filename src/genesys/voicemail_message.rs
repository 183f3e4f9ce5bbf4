use serde_derive::Deserialize;
use url::Url;

/// Voicemail message queued in the platform.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailMessage {
    /// Unique identifier of the voicemail message.
    pub id: String,
    /// Conversation the voicemail was left in.
    pub conversation: Option<VoicemailConversation>,
}

impl VoicemailMessage {
    /// Checks whether the message belongs to the specified conversation.
    pub fn belongs_to(&self, conversation_id: &str) -> bool {
        self.conversation
            .as_ref()
            .is_some_and(|conversation| conversation.id == conversation_id)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VoicemailConversation {
    pub id: String,
}

/// Single page of the queue voicemail messages listing.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailMessagesPage {
    #[serde(default)]
    pub entities: Vec<VoicemailMessage>,
    /// URI of the next page, absent for the last page.
    pub next_uri: Option<String>,
}

/// Location of the voicemail message recording.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailMedia {
    pub media_file_uri: Url,
}
