use colored::*;

use dockmap_common::topology::{Container, Network, Port, Topology};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn network_to_details(network: &Network) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        (
            "Subnet".to_string(),
            network.gateway.as_str().color(colors::IPV4_ADDR),
        ),
        ("Color".to_string(), network.color.as_str().normal()),
    ];

    let flags: Vec<&str> = [
        (network.internal, "internal"),
        (network.isolated, "isolated"),
    ]
    .into_iter()
    .filter_map(|(set, flag)| set.then_some(flag))
    .collect();

    if !flags.is_empty() {
        details.push(("Flags".to_string(), flags.join(", ").color(colors::FLAG)));
    }
    details
}

pub fn id_to_detail(container: &Container) -> Detail {
    ("ID".to_string(), container.short_id().normal())
}

pub fn ports_to_detail(ports: &[Port]) -> Option<Detail> {
    if ports.is_empty() {
        return None;
    }
    let joined: String = ports
        .iter()
        .map(|port| port.number.as_str())
        .collect::<Vec<&str>>()
        .join(", ");
    Some(("Ports".to_string(), joined.normal()))
}

/// One line per interface: network, address and remaining aliases.
pub fn interfaces_to_details(topology: &Topology, container: &Container) -> Vec<Detail> {
    container
        .interfaces
        .iter()
        .map(|interface| {
            let network: &str = topology
                .links
                .iter()
                .find(|link| {
                    link.container_id == container.container_id
                        && link.endpoint_id == interface.endpoint_id
                })
                .map_or("?", |link| link.network_name.as_str());

            let mut value: String = network.to_string();
            if !interface.address.is_empty() {
                value.push_str(&format!(" {}", interface.address));
            }
            if !interface.aliases.is_empty() {
                value.push_str(&format!(" [{}]", interface.aliases.join(", ")));
            }
            ("Net".to_string(), value.color(colors::TEXT_DEFAULT))
        })
        .collect()
}

pub fn summary(topology: &Topology) -> String {
    let networks: ColoredString = format!("{} networks", topology.networks.len()).bold().green();
    let containers: ColoredString =
        format!("{} containers", topology.containers.len()).bold().green();
    let links: ColoredString = format!("{} attachments", topology.links.len()).bold().yellow();
    format!("Topology: {networks}, {containers}, {links}")
}
