use serde_derive::{Deserialize, Serialize};

/// Page size used to list queue voicemail messages when none (or zero) is configured.
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Configuration for the voicemail export handler.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VoicemailConfig {
    /// ID (name or ARN) of the secret that holds the platform OAuth credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,
    /// Name of the S3 bucket voicemail recordings are uploaded to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Number of voicemail messages to request per page.
    pub page_size: u32,
    /// Defines whether voicemail message should be deleted once uploaded.
    pub delete_after_upload: bool,
    /// Defines whether voicemail message should be marked as read once uploaded.
    pub mark_read_after_upload: bool,
    /// Defines whether the callback conversation should be disconnected before the export, so
    /// that the voicemail isn't routed to an agent.
    pub disconnect_callback: bool,
}

impl VoicemailConfig {
    /// Returns the page size to use, falling back to the default for non-positive values.
    pub fn effective_page_size(&self) -> u32 {
        if self.page_size > 0 {
            self.page_size
        } else {
            DEFAULT_PAGE_SIZE
        }
    }
}

impl Default for VoicemailConfig {
    fn default() -> Self {
        Self {
            secret_id: None,
            bucket: None,
            page_size: DEFAULT_PAGE_SIZE,
            delete_after_upload: false,
            mark_read_after_upload: false,
            disconnect_callback: false,
        }
    }
}
