mod s3_object_store;

pub use self::s3_object_store::S3ObjectStore;
use async_trait::async_trait;
use bytes::Bytes;

/// Object storage that voicemail recordings are persisted to.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Uploads the object with the specified key to the bucket, replacing existing one.
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> anyhow::Result<()>;
}

#[cfg(test)]
pub mod tests {
    use super::ObjectStore;
    use anyhow::bail;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MockObject {
        pub bucket: String,
        pub key: String,
        pub body: Bytes,
    }

    /// In-memory object store that records all uploaded objects.
    #[derive(Debug, Default)]
    pub struct MockObjectStore {
        objects: Mutex<Vec<MockObject>>,
        failure: Option<String>,
    }

    impl MockObjectStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_failure<M: Into<String>>(message: M) -> Self {
            Self {
                objects: Mutex::default(),
                failure: Some(message.into()),
            }
        }

        pub fn objects(&self) -> Vec<MockObject> {
            self.objects.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ObjectStore for MockObjectStore {
        async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> anyhow::Result<()> {
            if let Some(message) = &self.failure {
                bail!(message.clone());
            }

            self.objects.lock().unwrap().push(MockObject {
                bucket: bucket.to_string(),
                key: key.to_string(),
                body,
            });

            Ok(())
        }
    }
}
