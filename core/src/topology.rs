//! # Topology Model Builder
//!
//! Converts raw runtime records into the [`Topology`] snapshot: networks with
//! their derived flags and colors, containers with their interfaces, and one
//! [`Link`] per container-to-network attachment.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use dockmap_common::color::ColorAllocator;
use dockmap_common::error::SourceError;
use dockmap_common::topology::{
    Container, HOST_NETWORK, Interface, Link, Network, Port, Topology, short_id,
};

use crate::runtime::{ContainerRecord, NetworkRecord, RuntimeSource};

/// Network option that disables inter-container communication when `"false"`.
pub const ICC_OPTION: &str = "com.docker.network.bridge.enable_icc";

/// Builds a [`Topology`] from whatever a [`RuntimeSource`] reports.
pub struct TopologyBuilder {
    source: Box<dyn RuntimeSource>,
    colors: ColorAllocator,
}

impl TopologyBuilder {
    pub fn new(source: Box<dyn RuntimeSource>) -> Self {
        Self::with_colors(source, ColorAllocator::new())
    }

    pub fn with_colors(source: Box<dyn RuntimeSource>, colors: ColorAllocator) -> Self {
        Self { source, colors }
    }

    /// Queries the runtime and builds the snapshot.
    ///
    /// Queries run strictly one after another. The first failure aborts the
    /// build, nothing is returned partially.
    pub async fn build(&mut self) -> Result<Topology, SourceError> {
        let networks = self.collect_networks().await?;
        let (containers, links) = self.collect_containers().await?;

        Ok(Topology {
            networks,
            containers,
            links,
        })
    }

    async fn collect_networks(&mut self) -> Result<BTreeMap<String, Network>, SourceError> {
        let mut records: Vec<NetworkRecord> = self.source.list_networks().await?;
        // Color assignment follows name order so runs are reproducible.
        records.sort_by(|a, b| a.name.cmp(&b.name));

        let mut networks: BTreeMap<String, Network> = BTreeMap::new();
        for record in records {
            let Some(gateway) = first_subnet(&record) else {
                debug!(network = %record.name, "no subnet configured, skipping");
                continue;
            };

            if record.name == HOST_NETWORK {
                continue;
            }

            if self.colors.remaining() == 0 {
                debug!(network = %record.name, "palette exhausted, color may repeat");
            }

            let network = Network {
                gateway: gateway.to_string(),
                internal: record.internal,
                isolated: is_isolated(&record.options),
                color: self.colors.next_color(),
                name: record.name,
            };

            info!(
                network = %network.name,
                gateway = %network.gateway,
                internal = network.internal,
                isolated = network.isolated,
                "network discovered"
            );
            networks.insert(network.name.clone(), network);
        }

        networks.insert(HOST_NETWORK.to_string(), Network::host());
        Ok(networks)
    }

    async fn collect_containers(&mut self) -> Result<(Vec<Container>, Vec<Link>), SourceError> {
        let records: Vec<ContainerRecord> = self.source.list_containers().await?;

        let mut containers: Vec<Container> = Vec::with_capacity(records.len());
        let mut links: Vec<Link> = Vec::new();

        for record in records {
            let details = self.source.inspect_container(&record.id).await?;
            let name: String = display_name(&record);
            let own: [&str; 2] = [short_id(&record.id), name.as_str()];

            let ports: Vec<Port> = details
                .ports
                .iter()
                .map(|key| Port::from_binding(key))
                .collect();

            let mut interfaces: Vec<Interface> = Vec::with_capacity(details.attachments.len());
            for attachment in details.attachments {
                links.push(Link {
                    container_id: record.id.clone(),
                    endpoint_id: attachment.endpoint_id.clone(),
                    network_name: attachment.network,
                });
                interfaces.push(Interface {
                    aliases: filter_aliases(&attachment.aliases, &own),
                    endpoint_id: attachment.endpoint_id,
                    address: attachment.ip_address,
                });
            }

            info!(
                container = %name,
                ports = ports.len(),
                interfaces = interfaces.len(),
                "container discovered"
            );

            containers.push(Container {
                container_id: record.id,
                name,
                ports,
                interfaces,
            });
        }

        Ok((containers, links))
    }
}

fn first_subnet(record: &NetworkRecord) -> Option<&str> {
    record
        .subnets
        .first()
        .map(String::as_str)
        .filter(|subnet| !subnet.is_empty())
}

/// Whether the options explicitly disable inter-container communication.
pub fn is_isolated(options: &HashMap<String, String>) -> bool {
    options.get(ICC_OPTION).is_some_and(|value| value == "false")
}

/// First reported name without its leading `/`, or the short ID.
pub fn display_name(record: &ContainerRecord) -> String {
    record
        .names
        .first()
        .map(|name| name.strip_prefix('/').unwrap_or(name))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| short_id(&record.id))
        .to_string()
}

/// Drops aliases naming the container itself, then duplicates.
pub fn filter_aliases(aliases: &[String], own: &[&str]) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(aliases.len());
    for alias in aliases {
        if own.contains(&alias.as_str()) || kept.contains(alias) {
            continue;
        }
        kept.push(alias.clone());
    }
    kept
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
