mod aws_config;
mod genesys_config;
mod http_config;
mod raw_config;
mod voicemail_config;

pub use self::{
    aws_config::AwsConfig,
    genesys_config::GenesysConfig,
    http_config::{HttpClientConfig, HttpConfig},
    raw_config::RawConfig,
    voicemail_config::VoicemailConfig,
};

/// Main handlers config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Version of the voicemail bridge binary.
    pub version: String,
    /// Configuration for the Genesys Cloud platform.
    pub genesys: GenesysConfig,
    /// Configuration for the AWS SDK clients.
    pub aws: AwsConfig,
    /// Configuration for the HTTP functionality.
    pub http: HttpConfig,
    /// Configuration for the voicemail export handler.
    pub voicemail: VoicemailConfig,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            genesys: raw_config.genesys,
            aws: raw_config.aws,
            http: raw_config.http,
            voicemail: raw_config.voicemail,
        }
    }
}
