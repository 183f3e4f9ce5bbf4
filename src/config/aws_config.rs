use aws_config::{BehaviorVersion, Region, SdkConfig};
use serde_derive::{Deserialize, Serialize};

/// Configuration for the AWS SDK clients (Secrets Manager and S3).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct AwsConfig {
    /// AWS region. If not specified, the region is resolved from the environment (e.g.
    /// `AWS_REGION` variable that is always set inside Lambda).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Custom endpoint URL for all AWS services (e.g. LocalStack `http://localhost:4566`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl AwsConfig {
    /// Loads the shared AWS SDK configuration using the default credentials chain and the
    /// overrides from this config.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AwsConfig;
    use insta::assert_toml_snapshot;

    #[test]
    fn serialization_and_default() -> anyhow::Result<()> {
        assert!(toml::to_string(&AwsConfig::default())?.is_empty());

        let config = AwsConfig {
            region: Some("eu-west-1".to_string()),
            endpoint_url: Some("http://localhost:4566".to_string()),
        };
        assert_toml_snapshot!(config, @r###"
        region = 'eu-west-1'
        endpoint_url = 'http://localhost:4566'
        "###);

        Ok(())
    }

    #[test]
    fn deserialization() {
        let config: AwsConfig = toml::from_str("region = 'us-east-2'").unwrap();
        assert_eq!(
            config,
            AwsConfig {
                region: Some("us-east-2".to_string()),
                endpoint_url: None,
            }
        );
    }
}
