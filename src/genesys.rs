mod api_ext;
mod genesys_user;
mod platform_credentials;
mod token_pair;
mod voicemail_message;

pub use self::{
    genesys_user::GenesysUser,
    platform_credentials::PlatformCredentials,
    token_pair::TokenPair,
    voicemail_message::{VoicemailMedia, VoicemailMessage, VoicemailMessagesPage},
};
