use crate::config::{AwsConfig, GenesysConfig, HttpConfig, VoicemailConfig};
use figment::{Figment, Metadata, Profile, Provider, providers, providers::Format, value};
use serde_derive::{Deserialize, Serialize};

/// Raw configuration structure that is used to read the configuration from the file and
/// environment.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RawConfig {
    /// Configuration for the Genesys Cloud platform.
    pub genesys: GenesysConfig,
    /// Configuration for the AWS SDK clients.
    pub aws: AwsConfig,
    /// Configuration for the HTTP functionality.
    pub http: HttpConfig,
    /// Configuration for the voicemail export handler.
    pub voicemail: VoicemailConfig,
}

impl RawConfig {
    /// Reads the configuration from the file (TOML), if it exists, and merges it with the
    /// default values and `VOICEMAIL_BRIDGE_` prefixed environment variables.
    pub fn read_from_file(path: &str) -> anyhow::Result<Self> {
        Ok(Figment::from(RawConfig::default())
            .merge(providers::Toml::file(path))
            .merge(providers::Env::prefixed("VOICEMAIL_BRIDGE_").split("__"))
            .extract()?)
    }
}

impl Provider for RawConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("Voicemail bridge main configuration")
    }

    fn data(&self) -> Result<value::Map<Profile, value::Dict>, figment::Error> {
        providers::Serialized::defaults(Self::default()).data()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::RawConfig;
    use insta::assert_debug_snapshot;

    #[test]
    fn default() {
        assert_debug_snapshot!(RawConfig::default(), @r###"
        RawConfig {
            genesys: GenesysConfig {
                environment: "mypurecloud.com",
                api_url: None,
                login_url: None,
            },
            aws: AwsConfig {
                region: None,
                endpoint_url: None,
            },
            http: HttpConfig {
                client: HttpClientConfig {
                    timeout: 30s,
                    pool_idle_timeout: 5s,
                    max_retries: 3,
                    verbose: false,
                },
            },
            voicemail: VoicemailConfig {
                secret_id: None,
                bucket: None,
                page_size: 10,
                delete_after_upload: false,
                mark_read_after_upload: false,
                disconnect_callback: false,
            },
        }
        "###);
    }

    #[test]
    fn deserialization() {
        let config: RawConfig = toml::from_str(
            r#"
        [genesys]
        environment = 'mypurecloud.de'
        login_url = 'http://localhost:7777/'

        [aws]
        region = 'eu-central-1'

        [http.client]
        timeout = 60000
        pool_idle_timeout = 6000
        max_retries = 6
        verbose = true

        [voicemail]
        secret_id = 'genesys-oauth'
        bucket = 'voicemails'
        page_size = 25
        delete_after_upload = true
        mark_read_after_upload = false
        disconnect_callback = true
    "#,
        )
        .unwrap();

        assert_debug_snapshot!(config, @r###"
        RawConfig {
            genesys: GenesysConfig {
                environment: "mypurecloud.de",
                api_url: None,
                login_url: Some(
                    Url {
                        scheme: "http",
                        cannot_be_a_base: false,
                        username: "",
                        password: None,
                        host: Some(
                            Domain(
                                "localhost",
                            ),
                        ),
                        port: Some(
                            7777,
                        ),
                        path: "/",
                        query: None,
                        fragment: None,
                    },
                ),
            },
            aws: AwsConfig {
                region: Some(
                    "eu-central-1",
                ),
                endpoint_url: None,
            },
            http: HttpConfig {
                client: HttpClientConfig {
                    timeout: 60s,
                    pool_idle_timeout: 6s,
                    max_retries: 6,
                    verbose: true,
                },
            },
            voicemail: VoicemailConfig {
                secret_id: Some(
                    "genesys-oauth",
                ),
                bucket: Some(
                    "voicemails",
                ),
                page_size: 25,
                delete_after_upload: true,
                mark_read_after_upload: false,
                disconnect_callback: true,
            },
        }
        "###);
    }
}
