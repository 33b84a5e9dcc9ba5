use async_trait::async_trait;
use bollard::Docker;
use bollard::container::{InspectContainerOptions, ListContainersOptions};
use bollard::models::{ContainerInspectResponse, ContainerSummary, EndpointSettings, Network};
use bollard::network::ListNetworksOptions;
use tracing::debug;

use dockmap_common::error::SourceError;

use super::{AttachmentRecord, ContainerDetails, ContainerRecord, NetworkRecord, RuntimeSource};

/// [`RuntimeSource`] backed by the Docker Engine API.
pub struct DockerSource {
    docker: Docker,
}

impl DockerSource {
    /// Connects using the local defaults, `DOCKER_HOST` is honoured.
    pub fn connect() -> Result<Self, SourceError> {
        let docker = Docker::connect_with_local_defaults()
            .map_err(|e| SourceError::Connect(Box::new(e)))?;
        debug!("connected to the docker daemon");
        Ok(Self { docker })
    }
}

#[async_trait]
impl RuntimeSource for DockerSource {
    async fn list_networks(&self) -> Result<Vec<NetworkRecord>, SourceError> {
        let networks = self
            .docker
            .list_networks(None::<ListNetworksOptions<String>>)
            .await
            .map_err(|e| SourceError::ListNetworks(Box::new(e)))?;

        Ok(networks.into_iter().map(network_record).collect())
    }

    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, SourceError> {
        let containers = self
            .docker
            .list_containers(None::<ListContainersOptions<String>>)
            .await
            .map_err(|e| SourceError::ListContainers(Box::new(e)))?;

        Ok(containers.into_iter().map(container_record).collect())
    }

    async fn inspect_container(&self, id: &str) -> Result<ContainerDetails, SourceError> {
        let response = self
            .docker
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
            .map_err(|e| SourceError::Inspect {
                id: id.to_string(),
                source: Box::new(e),
            })?;

        Ok(container_details(response))
    }
}

fn network_record(network: Network) -> NetworkRecord {
    let subnets: Vec<String> = network
        .ipam
        .and_then(|ipam| ipam.config)
        .unwrap_or_default()
        .into_iter()
        .map(|config| config.subnet.unwrap_or_default())
        .collect();

    NetworkRecord {
        name: network.name.unwrap_or_default(),
        subnets,
        internal: network.internal.unwrap_or(false),
        options: network.options.unwrap_or_default(),
    }
}

fn container_record(summary: ContainerSummary) -> ContainerRecord {
    ContainerRecord {
        id: summary.id.unwrap_or_default(),
        names: summary.names.unwrap_or_default(),
    }
}

/// The API reports ports and networks as maps, both are sorted by key here.
fn container_details(response: ContainerInspectResponse) -> ContainerDetails {
    let settings = response.network_settings.unwrap_or_default();

    let mut ports: Vec<String> = settings.ports.unwrap_or_default().into_keys().collect();
    ports.sort();

    let mut networks: Vec<(String, EndpointSettings)> =
        settings.networks.unwrap_or_default().into_iter().collect();
    networks.sort_by(|(a, _), (b, _)| a.cmp(b));

    let attachments = networks
        .into_iter()
        .map(|(network, endpoint)| AttachmentRecord {
            network,
            endpoint_id: endpoint.endpoint_id.unwrap_or_default(),
            ip_address: endpoint.ip_address.unwrap_or_default(),
            aliases: endpoint.aliases.unwrap_or_default(),
        })
        .collect();

    ContainerDetails { ports, attachments }
}
