use async_trait::async_trait;

use dockmap_common::error::SourceError;

use super::{ContainerDetails, ContainerRecord, NetworkRecord, RuntimeSource};

/// [`RuntimeSource`] answering from records kept in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    networks: Vec<NetworkRecord>,
    containers: Vec<(ContainerRecord, ContainerDetails)>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn network(mut self, record: NetworkRecord) -> Self {
        self.networks.push(record);
        self
    }

    pub fn container(mut self, record: ContainerRecord, details: ContainerDetails) -> Self {
        self.containers.push((record, details));
        self
    }
}

#[async_trait]
impl RuntimeSource for StaticSource {
    async fn list_networks(&self) -> Result<Vec<NetworkRecord>, SourceError> {
        Ok(self.networks.clone())
    }

    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, SourceError> {
        Ok(self.containers.iter().map(|(record, _)| record.clone()).collect())
    }

    async fn inspect_container(&self, id: &str) -> Result<ContainerDetails, SourceError> {
        self.containers
            .iter()
            .find(|(record, _)| record.id == id)
            .map(|(_, details)| details.clone())
            .ok_or_else(|| SourceError::UnknownContainer(id.to_string()))
    }
}
