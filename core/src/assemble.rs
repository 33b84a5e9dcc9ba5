//! # Graph Assembler
//!
//! Walks a [`Topology`] and emits the abstract [`Graph`]: one node per network,
//! one node per container, one edge per attachment and the `start -> end`
//! exposure edges.

use tracing::warn;

use dockmap_common::color::{CONTAINER_FILL, EXPOSURE_COLOR};
use dockmap_common::error::GraphError;
use dockmap_common::graph::{Edge, EdgeStyle, Endpoint, Graph, Node, NodeStyle, Record, Shape};
use dockmap_common::topology::{Container, Interface, Link, Network, Topology};

pub const GRAPH_NAME: &str = "dockmap";
pub const START_NODE: &str = "start";
pub const END_NODE: &str = "end";

pub const INTERNAL_MARKER: &str = "Internal";
pub const ISOLATED_MARKER: &str = "Containers isolated";

pub fn assemble(topology: &Topology) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(GRAPH_NAME);

    for network in topology.networks.values() {
        graph.add_node(network_node(network))?;
    }

    for container in &topology.containers {
        graph.add_node(container_node(container))?;
    }

    for link in &topology.links {
        if link.is_detached() {
            continue;
        }
        let Some(network) = topology.network(&link.network_name) else {
            warn!(
                network = %link.network_name,
                container = %link.container_id,
                "attachment to a network outside the model, not drawn"
            );
            continue;
        };
        graph.add_edge(link_edge(link, network))?;
    }

    // One edge per exposed network, all between the same two nodes.
    for _ in topology.exposed_networks() {
        graph.ensure_node(START_NODE);
        graph.ensure_node(END_NODE);
        graph.add_edge(Edge {
            from: Endpoint::node(START_NODE),
            to: Endpoint::node(END_NODE),
            style: EdgeStyle::Dotted,
            color: Some(EXPOSURE_COLOR.to_string()),
        })?;
    }

    Ok(graph)
}

fn network_node(network: &Network) -> Node {
    Node::new(&network.name)
        .shape(Shape::Box)
        .label(network_label(network))
        .color(network.border_color())
        .style(NodeStyle::Rounded)
}

fn container_node(container: &Container) -> Node {
    Node::new(&container.container_id)
        .shape(Shape::Box)
        .label(container_label(container))
        .fill_color(CONTAINER_FILL)
        .style(NodeStyle::Filled)
}

/// `name | Internal | Containers isolated`, markers only when set.
pub fn network_label(network: &Network) -> Record {
    let mut fields: Vec<Record> = vec![Record::field(&network.name)];
    if network.internal {
        fields.push(Record::field(INTERNAL_MARKER));
    }
    if network.isolated {
        fields.push(Record::field(ISOLATED_MARKER));
    }
    Record::Group(fields)
}

/// Container name, then its ports when it has any, then one section per interface.
pub fn container_label(container: &Container) -> Record {
    let mut sections: Vec<Record> = vec![Record::field(&container.name)];
    if !container.ports.is_empty() {
        sections.push(Record::group(
            container.ports.iter().map(|port| Record::field(&port.number)),
        ));
    }
    sections.push(Record::group(container.interfaces.iter().map(interface_label)));
    Record::Group(sections)
}

/// Aliases followed by the address, the address field is anchored at the endpoint.
fn interface_label(interface: &Interface) -> Record {
    let aliases = interface.aliases.iter().map(Record::field);
    let address = Record::anchored(&interface.endpoint_id, &interface.address);
    Record::group(aliases.chain(std::iter::once(address)))
}

pub fn edge_style(network: &Network) -> EdgeStyle {
    if network.isolated {
        EdgeStyle::Dashed
    } else if network.is_host() {
        EdgeStyle::Bold
    } else {
        EdgeStyle::Solid
    }
}

fn link_edge(link: &Link, network: &Network) -> Edge {
    Edge {
        from: Endpoint::port(&link.container_id, &link.endpoint_id),
        to: Endpoint::node(&network.name),
        style: edge_style(network),
        color: Some(network.color.clone()),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
