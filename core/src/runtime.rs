//! # Runtime Data Source
//!
//! The boundary towards the container runtime. The rest of the pipeline only
//! sees the plain records defined here, never a runtime client type.
//!
//! * [`docker::DockerSource`]: the Docker Engine API.
//! * [`snapshot::StaticSource`]: pre-recorded records kept in memory.

pub mod docker;
pub mod snapshot;

use std::collections::HashMap;

use async_trait::async_trait;
use dockmap_common::error::SourceError;

pub use docker::DockerSource;
pub use snapshot::StaticSource;

/// A network as listed by the runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkRecord {
    pub name: String,
    /// Subnets of the IPAM configuration, in reported order. Entries may be empty.
    pub subnets: Vec<String>,
    pub internal: bool,
    pub options: HashMap<String, String>,
}

/// A container as listed by the runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerRecord {
    pub id: String,
    /// Names as reported, usually with a leading `/`.
    pub names: Vec<String>,
}

/// Result of inspecting a single container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerDetails {
    /// Port keys such as `8080/tcp`.
    pub ports: Vec<String>,
    pub attachments: Vec<AttachmentRecord>,
}

/// One network a container is attached to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttachmentRecord {
    pub network: String,
    pub endpoint_id: String,
    pub ip_address: String,
    pub aliases: Vec<String>,
}

/// Read access to the runtime's current network state.
///
/// Calls are issued one at a time. Any error aborts the run.
#[async_trait]
pub trait RuntimeSource: Send + Sync {
    async fn list_networks(&self) -> Result<Vec<NetworkRecord>, SourceError>;

    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, SourceError>;

    async fn inspect_container(&self, id: &str) -> Result<ContainerDetails, SourceError>;
}
