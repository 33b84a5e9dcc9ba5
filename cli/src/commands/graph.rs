use std::io;

use tracing::info;

use dockmap_common::config::Config;
use dockmap_common::topology::{Container, Topology};
use dockmap_core::render::RenderDriver;
use dockmap_core::runtime::DockerSource;
use dockmap_core::topology::TopologyBuilder;

use crate::terminal::{format, print};

pub async fn graph(cfg: &Config) -> anyhow::Result<()> {
    let source = DockerSource::connect()?;
    let mut builder = TopologyBuilder::new(Box::new(source));
    let topology: Topology = builder.build().await?;

    if cfg.verbose {
        print_topology(&topology);
    }

    let driver = RenderDriver::default();
    let stdout = io::stdout();
    let graph = dockmap_core::draw(&topology, &driver, &cfg.target(), &mut stdout.lock())?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph assembled"
    );
    Ok(())
}

fn print_topology(topology: &Topology) {
    print::header("networks");
    for (idx, network) in topology.networks.values().enumerate() {
        print::tree_head(idx, &network.name);
        print::as_tree_one_level(format::network_to_details(network));
    }

    print::header("containers");
    if topology.containers.is_empty() {
        print::print_status("No running containers");
    }
    for (idx, container) in topology.containers.iter().enumerate() {
        print::tree_head(idx, &container.name);
        print::as_tree_one_level(container_details(topology, container));
    }

    print::fat_separator();
    print::centerln(&format::summary(topology));
}

fn container_details(topology: &Topology, container: &Container) -> Vec<format::Detail> {
    let mut details: Vec<format::Detail> = vec![format::id_to_detail(container)];
    if let Some(ports) = format::ports_to_detail(&container.ports) {
        details.push(ports);
    }
    details.extend(format::interfaces_to_details(topology, container));
    details
}
