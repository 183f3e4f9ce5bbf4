use crate::object_store::ObjectStore;
use anyhow::Context;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::{Client as S3Client, primitives::ByteStream};
use bytes::Bytes;

/// Object store backed by AWS S3.
#[derive(Clone, Debug)]
pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    /// Creates S3 backed store from the shared SDK config.
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: S3Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> anyhow::Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .with_context(|| format!("Cannot upload object ({key}) to S3 bucket ({bucket})."))?;

        Ok(())
    }
}
