mod api_ext;
mod voicemail_event;

pub use self::voicemail_event::VoicemailEvent;
#[cfg(test)]
pub use self::voicemail_event::{VoicemailEventBody, VoicemailEventDetail};
