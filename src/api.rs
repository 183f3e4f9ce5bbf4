use crate::{
    config::Config, network::Network, object_store::ObjectStore, secrets_store::SecretsStore,
};

/// Collection of the clients handlers operate on. Constructed once per process and shared
/// between invocations.
pub struct Api<SS: SecretsStore, OS: ObjectStore> {
    pub config: Config,
    pub network: Network,
    pub secrets: SS,
    pub objects: OS,
}

impl<SS: SecretsStore, OS: ObjectStore> Api<SS, OS> {
    /// Instantiates APIs collection with the specified config and clients.
    pub fn new(config: Config, network: Network, secrets: SS, objects: OS) -> Self {
        Self {
            config,
            network,
            secrets,
            objects,
        }
    }
}
