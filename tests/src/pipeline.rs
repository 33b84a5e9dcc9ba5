#![cfg(test)]

use std::fs;

use dockmap_common::color::{ColorAllocator, PALETTE};
use dockmap_common::config::RenderTarget;
use dockmap_common::error::{Error, GraphError, SourceError};
use dockmap_common::graph::{EdgeStyle, Graph};
use dockmap_common::topology::Topology;
use dockmap_core::assemble::{END_NODE, ISOLATED_MARKER, START_NODE};
use dockmap_core::render::RenderDriver;
use dockmap_core::runtime::StaticSource;
use dockmap_core::topology::TopologyBuilder;

use crate::util::{
    attachment, bare_network, container, count_statements, details, isolated_network, network,
    DotCounts,
};

const WEB_ID: &str = "a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f0a1b2";
const DB_ID: &str = "0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0";

async fn snapshot(source: StaticSource) -> Topology {
    let mut builder = TopologyBuilder::with_colors(Box::new(source), ColorAllocator::with_seed(9));
    builder.build().await.expect("snapshot failed")
}

fn draw_to_stdout(topology: &Topology) -> (Graph, String) {
    let mut out: Vec<u8> = Vec::new();
    let graph = dockmap_core::draw(
        topology,
        &RenderDriver::default(),
        &RenderTarget::Stdout,
        &mut out,
    )
    .expect("draw failed");
    (graph, String::from_utf8(out).unwrap())
}

fn bridge_source() -> StaticSource {
    StaticSource::new()
        .network(network("bridge-name", "172.18.0.0/16"))
        .container(
            container(WEB_ID, "web-1"),
            details(
                &["8080/tcp"],
                vec![attachment("bridge-name", "ep-web", "172.18.0.2", &["web"])],
            ),
        )
}

#[tokio::test]
async fn single_bridge_network_with_one_container() {
    let topology = snapshot(bridge_source()).await;

    let names: Vec<&str> = topology.networks.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["bridge-name", "host"]);
    assert_eq!(topology.containers.len(), 1);

    let web = &topology.containers[0];
    assert_eq!(web.interfaces.len(), 1);
    assert_eq!(web.interfaces[0].aliases, vec!["web"]);
    assert_eq!(web.ports.len(), 1);
    assert_eq!(web.ports[0].number, "8080");

    let (graph, _) = draw_to_stdout(&topology);
    let bridge_color = &topology.network("bridge-name").unwrap().color;
    assert_eq!(bridge_color, PALETTE[0]);

    let to_bridge: Vec<_> = graph
        .edges()
        .iter()
        .filter(|e| e.to.node == "bridge-name")
        .collect();
    assert_eq!(to_bridge.len(), 1);
    assert_eq!(to_bridge[0].style, EdgeStyle::Solid);
    assert_eq!(to_bridge[0].color.as_ref(), Some(bridge_color));
    assert_eq!(to_bridge[0].from.node, WEB_ID);
    assert_eq!(to_bridge[0].from.port.as_deref(), Some("ep-web"));

    let exposure: Vec<_> = graph
        .edges()
        .iter()
        .filter(|e| e.from.node == START_NODE && e.to.node == END_NODE)
        .collect();
    assert_eq!(exposure.len(), 1);
    assert_eq!(exposure[0].style, EdgeStyle::Dotted);

    // bridge-name, host, web-1, start, end
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 2);
}

#[tokio::test]
async fn isolated_network_draws_dashed_edges_and_marker() {
    let source = StaticSource::new()
        .network(isolated_network("secure", "10.10.0.0/24"))
        .container(
            container(DB_ID, "db"),
            details(&[], vec![attachment("secure", "ep-db", "10.10.0.2", &[])]),
        );

    let topology = snapshot(source).await;
    assert!(topology.network("secure").unwrap().isolated);

    let (graph, text) = draw_to_stdout(&topology);
    let edge = graph
        .edges()
        .iter()
        .find(|e| e.to.node == "secure")
        .expect("edge to the isolated network");
    assert_eq!(edge.style, EdgeStyle::Dashed);

    let Some(label) = &graph.node("secure").unwrap().label else {
        panic!("network nodes carry record labels");
    };
    assert!(label.texts().contains(&ISOLATED_MARKER));
    assert!(text.contains("Containers isolated"));
    assert!(text.contains("style=\"dashed\""));
}

#[tokio::test]
async fn host_networking_is_bold_and_none_is_not_drawn() {
    let source = StaticSource::new()
        .network(bare_network("none"))
        .network(bare_network("host"))
        .container(
            container(WEB_ID, "agent"),
            details(&[], vec![attachment("host", "ep-host", "", &[])]),
        )
        .container(
            container(DB_ID, "offline"),
            details(&[], vec![attachment("none", "ep-none", "", &[])]),
        );

    let topology = snapshot(source).await;
    let (graph, _) = draw_to_stdout(&topology);

    assert!(graph.node("none").is_none());
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges()[0].to.node, "host");
    assert_eq!(graph.edges()[0].style, EdgeStyle::Bold);
    assert!(graph.node(START_NODE).is_none(), "host alone is not exposure");
}

#[tokio::test]
async fn own_names_never_appear_as_aliases() {
    let source = StaticSource::new()
        .network(network("front", "172.20.0.0/16"))
        .network(network("back", "172.21.0.0/16"))
        .container(
            container(WEB_ID, "web"),
            details(
                &[],
                vec![
                    attachment("front", "ep-1", "172.20.0.2", &["web", "a1b2c3d4e5f6", "www"]),
                    attachment("back", "ep-2", "172.21.0.2", &["a1b2c3d4e5f6", "web"]),
                ],
            ),
        )
        .container(
            container(DB_ID, "db"),
            details(
                &[],
                vec![attachment("back", "ep-3", "172.21.0.3", &["0f1e2d3c4b5a", "db", "postgres"])],
            ),
        );

    let topology = snapshot(source).await;
    for c in &topology.containers {
        for interface in &c.interfaces {
            assert!(!interface.aliases.contains(&c.name), "{} kept its name", c.name);
            assert!(
                !interface.aliases.iter().any(|a| a == c.short_id()),
                "{} kept its short id",
                c.name
            );
        }
    }
    assert_eq!(topology.containers[0].interfaces[0].aliases, vec!["www"]);
    assert!(topology.containers[0].interfaces[1].aliases.is_empty());
    assert_eq!(topology.containers[1].interfaces[0].aliases, vec!["postgres"]);
}

#[tokio::test]
async fn dot_file_round_trip_keeps_counts() {
    let source = bridge_source()
        .network(network("extra", "10.0.0.0/8"))
        .network(isolated_network("internal-ish", "10.1.0.0/16"));
    let topology = snapshot(source).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("topology.dot");
    let mut out: Vec<u8> = Vec::new();
    let graph = dockmap_core::draw(
        &topology,
        &RenderDriver::default(),
        &RenderTarget::File(path.clone()),
        &mut out,
    )
    .unwrap();

    assert!(out.is_empty(), "file rendering writes nothing to stdout");
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        count_statements(&text),
        DotCounts {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        }
    );
    // three exposed networks, three exposure edges between the same pair
    assert_eq!(
        graph
            .edges()
            .iter()
            .filter(|e| e.from.node == START_NODE)
            .count(),
        3
    );
}

#[tokio::test]
async fn url_mode_only_prints_a_notice() {
    let topology = snapshot(bridge_source()).await;
    let mut out: Vec<u8> = Vec::new();
    dockmap_core::draw(&topology, &RenderDriver::default(), &RenderTarget::Url, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap().trim(),
        dockmap_core::render::URL_NOTICE
    );
}

#[tokio::test]
async fn missing_container_aborts_snapshot() {
    struct Vanishing;

    #[async_trait::async_trait]
    impl dockmap_core::runtime::RuntimeSource for Vanishing {
        async fn list_networks(
            &self,
        ) -> Result<Vec<dockmap_core::runtime::NetworkRecord>, SourceError> {
            Ok(Vec::new())
        }

        async fn list_containers(
            &self,
        ) -> Result<Vec<dockmap_core::runtime::ContainerRecord>, SourceError> {
            Ok(vec![container(WEB_ID, "web")])
        }

        async fn inspect_container(
            &self,
            id: &str,
        ) -> Result<dockmap_core::runtime::ContainerDetails, SourceError> {
            Err(SourceError::UnknownContainer(id.to_string()))
        }
    }

    let mut builder = TopologyBuilder::new(Box::new(Vanishing));
    let err = builder.build().await.unwrap_err();
    assert_eq!(err.to_string(), format!("no such container: {WEB_ID}"));
}

#[tokio::test]
async fn clashing_identifiers_fail_the_draw() {
    let source = StaticSource::new()
        .network(network(WEB_ID, "10.0.0.0/24"))
        .container(container(WEB_ID, "web"), details(&[], Vec::new()));
    let topology = snapshot(source).await;

    let err = dockmap_core::draw(
        &topology,
        &RenderDriver::default(),
        &RenderTarget::Stdout,
        &mut Vec::<u8>::new(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Graph(GraphError::DuplicateNode(id)) if id == WEB_ID));
}
