//! # dockmap-core
//!
//! The snapshot-and-render pipeline:
//!
//! 1. **[`runtime`]**: queries the container runtime through the [`runtime::RuntimeSource`] port.
//! 2. **[`topology`]**: turns raw records into a [`dockmap_common::topology::Topology`].
//! 3. **[`assemble`]**: walks the topology and emits an abstract graph.
//! 4. **[`render`]**: serializes the graph and writes it to its target.
//!
//! Data flows strictly in that order, each stage only sees the output of the previous one.

pub mod assemble;
pub mod render;
pub mod runtime;
pub mod topology;

use std::io::Write;

use dockmap_common::config::RenderTarget;
use dockmap_common::error::Result;
use dockmap_common::graph::Graph;
use dockmap_common::topology::Topology;

use render::RenderDriver;

/// Assembles the graph for `topology` and renders it to `target`.
///
/// `out` receives whatever is meant for standard output.
pub fn draw<W: Write>(
    topology: &Topology,
    driver: &RenderDriver,
    target: &RenderTarget,
    out: &mut W,
) -> Result<Graph> {
    let graph = assemble::assemble(topology)?;
    driver.render(&graph, target, out)?;
    Ok(graph)
}
