mod rotation_log_context;
mod voicemail_log_context;

pub use self::{
    rotation_log_context::RotationLogContext, voicemail_log_context::VoicemailLogContext,
};
